/// Integration tests for sample-data seeding against a mock backend.
mod common;

use common::{client_for, mock_list};
use mockito::{Matcher, Server};
use reliefhub::application::seed::sample_helplines;
use reliefhub::application::{seed_all, seed_kind, SeedOutcome};
use reliefhub::{Helplines, SyncError};
use serde_json::json;

#[tokio::test]
async fn test_empty_collection_is_seeded() {
    let mut server = Server::new_async().await;
    let _list = mock_list(&mut server, "/api/helplines", &json!([])).await;
    let post = server
        .mock("POST", "/api/helplines")
        .with_status(201)
        .with_body("{}")
        .expect(4)
        .create_async()
        .await;

    let api = client_for(&server);
    let outcome = seed_kind::<Helplines>(api.as_ref(), &sample_helplines())
        .await
        .unwrap();

    assert_eq!(outcome, SeedOutcome::Inserted { count: 4 });
    post.assert_async().await;
}

#[tokio::test]
async fn test_populated_collection_is_left_alone() {
    let mut server = Server::new_async().await;
    let _list = mock_list(&mut server, "/api/helplines", &json!([{"name": "911"}])).await;
    let post = server
        .mock("POST", "/api/helplines")
        .with_status(201)
        .expect(0)
        .create_async()
        .await;

    let api = client_for(&server);
    let outcome = seed_kind::<Helplines>(api.as_ref(), &sample_helplines())
        .await
        .unwrap();

    assert_eq!(outcome, SeedOutcome::Skipped { existing: 1 });
    post.assert_async().await;
}

#[tokio::test]
async fn test_seed_all_reports_each_kind() {
    let mut server = Server::new_async().await;
    let _alerts = mock_list(&mut server, "/api/alerts", &json!([])).await;
    let rainfall = server
        .mock("POST", "/api/alerts")
        .match_body(Matcher::PartialJson(
            json!({"title": "Heavy Rainfall Warning", "severity": "high"}),
        ))
        .with_status(201)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;
    let shelter = server
        .mock("POST", "/api/alerts")
        .match_body(Matcher::PartialJson(
            json!({"title": "Emergency Shelter Open", "severity": "medium"}),
        ))
        .with_status(201)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;
    let _helplines = mock_list(&mut server, "/api/helplines", &json!([{}, {}])).await;
    let _locations = server
        .mock("GET", "/api/safe-locations")
        .with_status(500)
        .create_async()
        .await;
    let _volunteers = mock_list(&mut server, "/api/volunteers", &json!([])).await;
    let volunteer_posts = server
        .mock("POST", "/api/volunteers")
        .match_body(Matcher::PartialJson(json!({"availability": "available"})))
        .with_status(201)
        .with_body("{}")
        .expect(2)
        .create_async()
        .await;

    let api = client_for(&server);
    let results = seed_all(api.as_ref()).await;

    let kinds: Vec<&str> = results.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(kinds, ["alerts", "helplines", "safe-locations", "volunteers"]);
    assert_eq!(
        results[0].1.as_ref().unwrap(),
        &SeedOutcome::Inserted { count: 2 }
    );
    assert_eq!(
        results[1].1.as_ref().unwrap(),
        &SeedOutcome::Skipped { existing: 2 }
    );
    assert!(matches!(results[2].1, Err(SyncError::LoadFailed { .. })));
    assert_eq!(
        results[3].1.as_ref().unwrap(),
        &SeedOutcome::Inserted { count: 2 }
    );

    rainfall.assert_async().await;
    shelter.assert_async().await;
    volunteer_posts.assert_async().await;
}
