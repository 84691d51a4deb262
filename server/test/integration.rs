use events_command_handlers::{
    AttendEventHandler, CreateCommentHandler, CreateEventHandler,
    DeleteEventHandler, UpdateEventHandler,
};
use events_dao::{AttendanceDao, CommentDao, EventDao};
use events_query_handlers::{GetEventQueryHandler, ListEventsQueryHandler};
use test_utils::{TestPostgresContainer, *};

pub struct IntegrationTestSetup {
    pub container: TestPostgresContainer,
    pub event_dao: EventDao,
    pub comment_dao: CommentDao,
    pub attendance_dao: AttendanceDao,
    pub create_event_handler: CreateEventHandler,
    pub update_event_handler: UpdateEventHandler,
    pub delete_event_handler: DeleteEventHandler,
    pub create_comment_handler: CreateCommentHandler,
    pub attend_event_handler: AttendEventHandler,
    pub get_event_handler: GetEventQueryHandler,
    pub list_events_handler: ListEventsQueryHandler,
}

impl IntegrationTestSetup {
    pub async fn new() -> anyhow::Result<Self> {
        let container = TestPostgresContainer::new().await?;
        let sql_connect = create_sql_connect(&container);

        let event_dao = EventDao::new(sql_connect.clone());
        let comment_dao = CommentDao::new(sql_connect.clone());
        let attendance_dao = AttendanceDao::new(sql_connect.clone());

        let create_event_handler =
            CreateEventHandler::new(sql_connect.clone());
        let update_event_handler =
            UpdateEventHandler::new(sql_connect.clone());
        let delete_event_handler =
            DeleteEventHandler::new(sql_connect.clone());
        let create_comment_handler =
            CreateCommentHandler::new(sql_connect.clone());
        let attend_event_handler =
            AttendEventHandler::new(sql_connect.clone());
        let get_event_handler = GetEventQueryHandler::new(sql_connect.clone());
        let list_events_handler = ListEventsQueryHandler::new(sql_connect);

        Ok(Self {
            container,
            event_dao,
            comment_dao,
            attendance_dao,
            create_event_handler,
            update_event_handler,
            delete_event_handler,
            create_comment_handler,
            attend_event_handler,
            get_event_handler,
            list_events_handler,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use database_traits::dao::GenericDao;
    use events_commands::{
        AttendEventCommand, CreateCommentCommand, CreateEventCommand,
        DeleteEventCommand, UpdateEventCommand,
    };
    use events_queries::{GetEventQuery, ListEventsQuery};
    use test_utils::test_user_id;
    use uuid::Uuid;

    use crate::IntegrationTestSetup;

    fn sample_event(creator_id: Uuid, name: &str) -> CreateEventCommand {
        CreateEventCommand {
            creator_id,
            category: "conference".to_string(),
            name: name.to_string(),
            details: "An event worth attending".to_string(),
            venue: "Main Hall".to_string(),
            time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
            date: NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
        }
    }

    #[tokio::test]
    async fn full_event_lifecycle() {
        let setup = IntegrationTestSetup::new().await.unwrap();
        let creator = test_user_id();

        let created = setup
            .create_event_handler
            .execute(sample_event(creator, "RustConf"))
            .await
            .unwrap();
        assert_eq!(created.message, "RustConf was created successfully");
        let event_id = created.event.id;

        let updated = setup
            .update_event_handler
            .execute(UpdateEventCommand {
                event_id,
                category: None,
                name: Some("RustConf 2026".to_string()),
                details: None,
                venue: Some("Grand Hall".to_string()),
                time: None,
                date: None,
            })
            .await
            .unwrap();
        assert_eq!(
            updated.message,
            "RustConf 2026 was updated successfully"
        );
        assert_eq!(updated.event.category, "conference");

        let deleted = setup
            .delete_event_handler
            .execute(DeleteEventCommand { event_id })
            .await
            .unwrap();
        assert_eq!(
            deleted.message,
            "RustConf 2026 was deleted successfully"
        );
        assert!(setup.event_dao.find_by_id(event_id).await.is_err());
    }

    #[tokio::test]
    async fn detail_aggregates_comments_and_attendance() {
        let setup = IntegrationTestSetup::new().await.unwrap();
        let creator = test_user_id();
        let commenter = test_user_id();

        let created = setup
            .create_event_handler
            .execute(sample_event(creator, "Community Day"))
            .await
            .unwrap();
        let event_id = created.event.id;

        setup
            .create_comment_handler
            .execute(CreateCommentCommand {
                event_id,
                author_id: commenter,
                body: "Looking forward to it".to_string(),
            })
            .await
            .unwrap();
        setup
            .attend_event_handler
            .execute(AttendEventCommand {
                event_id,
                user_id: commenter,
            })
            .await
            .unwrap();

        let detail = setup
            .get_event_handler
            .execute(GetEventQuery {
                event_id,
                viewer: commenter,
            })
            .await
            .unwrap();

        assert_eq!(detail.event.name, "Community Day");
        assert_eq!(detail.comments.len(), 1);
        assert_eq!(detail.attendees, vec![commenter]);
        assert!(detail.attending);

        let as_creator = setup
            .get_event_handler
            .execute(GetEventQuery {
                event_id,
                viewer: creator,
            })
            .await
            .unwrap();
        assert!(!as_creator.attending);
    }

    #[tokio::test]
    async fn attendance_is_idempotent_across_users() {
        let setup = IntegrationTestSetup::new().await.unwrap();
        let created = setup
            .create_event_handler
            .execute(sample_event(test_user_id(), "Workshop"))
            .await
            .unwrap();
        let event_id = created.event.id;

        let alice = test_user_id();
        let bob = test_user_id();

        for _ in 0..2 {
            setup
                .attend_event_handler
                .execute(AttendEventCommand {
                    event_id,
                    user_id: alice,
                })
                .await
                .unwrap();
        }
        setup
            .attend_event_handler
            .execute(AttendEventCommand {
                event_id,
                user_id: bob,
            })
            .await
            .unwrap();

        let count = setup
            .attendance_dao
            .count_for_event(event_id)
            .await
            .unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn deleting_an_event_removes_its_comments_and_attendance() {
        let setup = IntegrationTestSetup::new().await.unwrap();
        let user = test_user_id();
        let created = setup
            .create_event_handler
            .execute(sample_event(user, "Doomed Event"))
            .await
            .unwrap();
        let event_id = created.event.id;

        setup
            .create_comment_handler
            .execute(CreateCommentCommand {
                event_id,
                author_id: user,
                body: "See you there".to_string(),
            })
            .await
            .unwrap();
        setup
            .attend_event_handler
            .execute(AttendEventCommand {
                event_id,
                user_id: user,
            })
            .await
            .unwrap();

        setup
            .delete_event_handler
            .execute(DeleteEventCommand { event_id })
            .await
            .unwrap();

        assert_eq!(
            setup.comment_dao.count_for_event(event_id).await.unwrap(),
            0
        );
        assert_eq!(
            setup
                .attendance_dao
                .count_for_event(event_id)
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn list_filters_by_category() {
        let setup = IntegrationTestSetup::new().await.unwrap();
        let creator = test_user_id();

        let mut workshop = sample_event(creator, "Intro to Ownership");
        workshop.category = "workshop".to_string();
        setup.create_event_handler.execute(workshop).await.unwrap();
        setup
            .create_event_handler
            .execute(sample_event(creator, "Keynote"))
            .await
            .unwrap();

        let workshops = setup
            .list_events_handler
            .execute(ListEventsQuery {
                category: Some("workshop".to_string()),
                limit: None,
                offset: None,
            })
            .await
            .unwrap();
        assert_eq!(workshops.len(), 1);
        assert_eq!(workshops[0].name, "Intro to Ownership");

        let all = setup
            .list_events_handler
            .execute(ListEventsQuery {
                category: None,
                limit: None,
                offset: None,
            })
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn containers_are_isolated_per_test() {
        let setup1 = IntegrationTestSetup::new().await.unwrap();
        let setup2 = IntegrationTestSetup::new().await.unwrap();

        assert_ne!(
            setup1.container.connection_string,
            setup2.container.connection_string
        );

        let created = setup1
            .create_event_handler
            .execute(sample_event(test_user_id(), "Only Here"))
            .await
            .unwrap();

        assert!(setup1.event_dao.find_by_id(created.event.id).await.is_ok());
        assert!(setup2.event_dao.find_by_id(created.event.id).await.is_err());
    }
}
