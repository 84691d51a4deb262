use chrono::{NaiveDate, NaiveTime};
use database_traits::dao::GenericDao;
use events_commands::{CreateEventCommand, UpdateEventCommand};
use events_dao::{AttendanceDao, CommentDao, EventDao};
use events_errors::{CommentError, EventError};
use test_utils::{TestPostgresContainer, *};

fn sample_create_command(
    creator_id: uuid::Uuid, name: &str,
) -> CreateEventCommand {
    CreateEventCommand {
        creator_id,
        category: "conference".to_string(),
        name: name.to_string(),
        details: "Talks and hallway track".to_string(),
        venue: "Convention Centre".to_string(),
        time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        date: NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
    }
}

async fn setup() -> anyhow::Result<(TestPostgresContainer, EventDao)> {
    let container = TestPostgresContainer::new().await?;
    let dao = EventDao::new(create_sql_connect(&container));
    Ok((container, dao))
}

#[tokio::test]
async fn create_and_find_event() {
    let (_container, dao) = setup().await.unwrap();
    let creator = test_user_id();

    let created =
        dao.create(sample_create_command(creator, "RustFest")).await.unwrap();
    assert_eq!(created.name, "RustFest");
    assert_eq!(created.creator_id, creator);

    let found = dao.find_by_id(created.id).await.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.venue, "Convention Centre");
}

#[tokio::test]
async fn find_missing_event_is_not_found() {
    let (_container, dao) = setup().await.unwrap();

    let result = dao.find_by_id(9999).await;
    assert!(matches!(
        result,
        Err(EventError::NotFound { event_id: 9999 })
    ));
}

#[tokio::test]
async fn update_keeps_unsupplied_fields() {
    let (_container, dao) = setup().await.unwrap();
    let creator = test_user_id();
    let created =
        dao.create(sample_create_command(creator, "RustFest")).await.unwrap();

    let updated = dao
        .update(
            created.id,
            UpdateEventCommand {
                event_id: created.id,
                category: None,
                name: Some("RustFest 2026".to_string()),
                details: None,
                venue: None,
                time: None,
                date: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "RustFest 2026");
    assert_eq!(updated.category, "conference");
    assert_eq!(updated.venue, "Convention Centre");
}

#[tokio::test]
async fn update_missing_event_is_not_found() {
    let (_container, dao) = setup().await.unwrap();

    let result = dao
        .update(
            424242,
            UpdateEventCommand {
                event_id: 424242,
                category: None,
                name: Some("Ghost".to_string()),
                details: None,
                venue: None,
                time: None,
                date: None,
            },
        )
        .await;
    assert!(matches!(result, Err(EventError::NotFound { .. })));
}

#[tokio::test]
async fn delete_removes_event_and_cascade() {
    let (container, dao) = setup().await.unwrap();
    let creator = test_user_id();
    let created =
        dao.create(sample_create_command(creator, "RustFest")).await.unwrap();
    insert_test_comment(&container, created.id, creator, "See you there")
        .await
        .unwrap();
    insert_test_attendee(&container, created.id, creator).await.unwrap();

    dao.delete(created.id).await.unwrap();

    assert!(matches!(
        dao.find_by_id(created.id).await,
        Err(EventError::NotFound { .. })
    ));
    assert_eq!(count_comments(&container, created.id).await.unwrap(), 0);
    assert_eq!(count_attendees(&container, created.id).await.unwrap(), 0);
}

#[tokio::test]
async fn delete_missing_event_is_not_found() {
    let (_container, dao) = setup().await.unwrap();

    let result = dao.delete(31337).await;
    assert!(matches!(result, Err(EventError::NotFound { .. })));
}

#[tokio::test]
async fn filters_by_category_with_pagination() {
    let (_container, dao) = setup().await.unwrap();
    let creator = test_user_id();

    for name in ["A", "B", "C"] {
        dao.create(sample_create_command(creator, name)).await.unwrap();
    }
    let mut other = sample_create_command(creator, "Potluck");
    other.category = "social".to_string();
    dao.create(other).await.unwrap();

    let conferences = dao
        .find_with_filters(
            Some("conference"),
            dao_utils::PaginationParams::new(Some(2), None),
        )
        .await
        .unwrap();
    assert_eq!(conferences.len(), 2);
    assert!(conferences.iter().all(|e| e.category == "conference"));

    let all = dao
        .find_with_filters(None, dao_utils::PaginationParams::new(None, None))
        .await
        .unwrap();
    assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn comment_insert_and_read_back_in_order() {
    let (container, dao) = setup().await.unwrap();
    let creator = test_user_id();
    let event =
        dao.create(sample_create_command(creator, "RustFest")).await.unwrap();

    let comment_dao = CommentDao::new(create_sql_connect(&container));
    let author = test_user_id();

    let first = comment_dao
        .create(events_commands::CreateCommentCommand {
            event_id: event.id,
            author_id: author,
            body: "Great event!".to_string(),
        })
        .await
        .unwrap();
    let second = comment_dao
        .create(events_commands::CreateCommentCommand {
            event_id: event.id,
            author_id: author,
            body: "Looking forward to it".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(first.created_by, author);
    assert_eq!(first.body, "Great event!");

    let comments = comment_dao.find_by_event(event.id).await.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, first.id);
    assert_eq!(comments[1].id, second.id);
}

#[tokio::test]
async fn comment_on_missing_event_is_not_found() {
    let (container, _dao) = setup().await.unwrap();
    let comment_dao = CommentDao::new(create_sql_connect(&container));

    let result = comment_dao
        .create(events_commands::CreateCommentCommand {
            event_id: 777,
            author_id: test_user_id(),
            body: "hello?".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(CommentError::EventNotFound { event_id: 777 })
    ));
    assert_eq!(count_comments(&container, 777).await.unwrap(), 0);
}

#[tokio::test]
async fn add_attendee_is_idempotent() {
    let (container, dao) = setup().await.unwrap();
    let creator = test_user_id();
    let event =
        dao.create(sample_create_command(creator, "RustFest")).await.unwrap();

    let attendance_dao = AttendanceDao::new(create_sql_connect(&container));
    let user = test_user_id();

    let first = attendance_dao.add_attendee(event.id, user).await.unwrap();
    let second = attendance_dao.add_attendee(event.id, user).await.unwrap();

    assert!(first);
    assert!(!second);
    assert_eq!(count_attendees(&container, event.id).await.unwrap(), 1);
    assert!(attendance_dao.is_attending(event.id, user).await.unwrap());
}

#[tokio::test]
async fn add_attendee_to_missing_event_is_not_found() {
    let (container, _dao) = setup().await.unwrap();
    let attendance_dao = AttendanceDao::new(create_sql_connect(&container));

    let result =
        attendance_dao.add_attendee(12345, test_user_id()).await;
    assert!(matches!(
        result,
        Err(EventError::NotFound { event_id: 12345 })
    ));
}

#[tokio::test]
async fn attendees_are_distinct_per_user() {
    let (container, dao) = setup().await.unwrap();
    let creator = test_user_id();
    let event =
        dao.create(sample_create_command(creator, "RustFest")).await.unwrap();

    let attendance_dao = AttendanceDao::new(create_sql_connect(&container));
    let alice = test_user_id();
    let bob = test_user_id();

    attendance_dao.add_attendee(event.id, alice).await.unwrap();
    attendance_dao.add_attendee(event.id, bob).await.unwrap();
    attendance_dao.add_attendee(event.id, alice).await.unwrap();

    let attendees = attendance_dao.attendees_for(event.id).await.unwrap();
    assert_eq!(attendees.len(), 2);
    assert!(attendees.contains(&alice));
    assert!(attendees.contains(&bob));
}
