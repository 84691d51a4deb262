use events_queries::ListEventsQuery;
use events_query_handlers::ListEventsQueryHandler;
use test_utils::{TestPostgresContainer, *};

async fn setup()
-> anyhow::Result<(TestPostgresContainer, ListEventsQueryHandler)> {
    let container = TestPostgresContainer::new().await?;
    let handler = ListEventsQueryHandler::new(create_sql_connect(&container));
    Ok((container, handler))
}

#[tokio::test]
async fn lists_all_events() {
    let (container, handler) = setup().await.unwrap();
    let creator = test_user_id();
    for name in ["One", "Two", "Three"] {
        insert_test_event(&container, creator, name).await.unwrap();
    }

    let events = handler
        .execute(ListEventsQuery {
            category: None,
            limit: None,
            offset: None,
        })
        .await
        .unwrap();

    assert_eq!(events.len(), 3);
}

#[tokio::test]
async fn respects_limit_and_offset() {
    let (container, handler) = setup().await.unwrap();
    let creator = test_user_id();
    for name in ["One", "Two", "Three", "Four"] {
        insert_test_event(&container, creator, name).await.unwrap();
    }

    let page_one = handler
        .execute(ListEventsQuery {
            category: None,
            limit: Some(2),
            offset: Some(0),
        })
        .await
        .unwrap();
    let page_two = handler
        .execute(ListEventsQuery {
            category: None,
            limit: Some(2),
            offset: Some(2),
        })
        .await
        .unwrap();

    assert_eq!(page_one.len(), 2);
    assert_eq!(page_two.len(), 2);
    let mut seen: Vec<i64> = page_one
        .iter()
        .chain(page_two.iter())
        .map(|e| e.id)
        .collect();
    seen.dedup();
    assert_eq!(seen.len(), 4);
}

#[tokio::test]
async fn unknown_category_matches_nothing() {
    let (container, handler) = setup().await.unwrap();
    insert_test_event(&container, test_user_id(), "One").await.unwrap();

    let events = handler
        .execute(ListEventsQuery {
            category: Some("opera".to_string()),
            limit: None,
            offset: None,
        })
        .await
        .unwrap();

    assert!(events.is_empty());
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    let (_container, handler) = setup().await.unwrap();

    let events = handler
        .execute(ListEventsQuery {
            category: None,
            limit: None,
            offset: None,
        })
        .await
        .unwrap();

    assert!(events.is_empty());
}
