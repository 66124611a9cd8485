mod common;

use axum::http::StatusCode;
use campus_server::entity::announcement;
use chrono::{DateTime, Duration, Utc};
use common::{app_for, get, post, test_db};
use sea_orm::{EntityTrait, QueryOrder};
use serde_json::json;

fn days_from_now(days: i64) -> String {
    (Utc::now() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

fn midnight(date: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&format!("{date}T00:00:00Z"))
        .expect("valid date")
        .with_timezone(&Utc)
}

#[tokio::test]
async fn test_initial_status_is_closed() {
    let app = app_for(test_db().await);

    let (status, body) = get(&app, "/api/feedback/admin/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "isActive": false, "endDate": null }));

    let (_, again) = get(&app, "/api/feedback/admin/status").await;
    assert_eq!(again, body);
}

#[tokio::test]
async fn test_rejected_toggles_change_nothing() {
    let db = test_db().await;
    let app = app_for(db.clone());

    let (status, body) = post(&app, "/api/feedback/admin/set", json!({ "active": true })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "End date is required to activate feedback");
    assert_eq!(body["message"], "End date is required to activate feedback");

    let (status, body) = post(
        &app,
        "/api/feedback/admin/set",
        json!({ "active": true, "endDate": days_from_now(-2) }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "End date must be in the future");

    let (status, body) = post(
        &app,
        "/api/feedback/admin/set",
        json!({ "active": true, "endDate": "sometime soon" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid end date format");

    let (status, body) = post(
        &app,
        "/api/feedback/admin/set",
        json!({ "active": "yes", "endDate": days_from_now(5) }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request: active must be a boolean");

    let (status, body) = post(
        &app,
        "/api/feedback/admin/set",
        json!({ "active": true, "endDate": true }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid end date format");

    let (status, body) = post(
        &app,
        "/api/feedback/admin/set",
        json!({ "active": true, "endDate": (Utc::now() - Duration::days(1)).timestamp_millis() }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "End date must be in the future");

    let (_, status_body) = get(&app, "/api/feedback/admin/status").await;
    assert_eq!(status_body["isActive"], false);

    let notices = announcement::Entity::find()
        .all(&db)
        .await
        .expect("announcements should load");
    assert!(notices.is_empty());
}

#[tokio::test]
async fn test_open_then_close_window() {
    let db = test_db().await;
    let app = app_for(db.clone());
    let end_date = days_from_now(7);
    let expected_end = midnight(&end_date);

    let (status, body) = post(
        &app,
        "/api/feedback/admin/set",
        json!({ "active": true, "endDate": end_date }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Feedback status updated");
    assert_eq!(body["isActive"], true);
    let returned_end: DateTime<Utc> =
        serde_json::from_value(body["endDate"].clone()).expect("endDate should be returned");
    assert_eq!(returned_end, expected_end);

    let (_, current) = get(&app, "/api/feedback/admin/status").await;
    assert_eq!(current["isActive"], true);
    let stored_end: DateTime<Utc> =
        serde_json::from_value(current["endDate"].clone()).expect("endDate should be a timestamp");
    assert_eq!(stored_end, expected_end);

    let (status, body) = post(&app, "/api/feedback/admin/set", json!({ "active": false })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isActive"], false);

    let (_, current) = get(&app, "/api/feedback/admin/status").await;
    assert_eq!(current["isActive"], false);
    let kept_end: DateTime<Utc> =
        serde_json::from_value(current["endDate"].clone()).expect("endDate should be kept");
    assert_eq!(kept_end, expected_end);

    let notices = announcement::Entity::find()
        .order_by_asc(announcement::Column::Date)
        .all(&db)
        .await
        .expect("announcements should load");
    assert_eq!(notices.len(), 2);

    let opened = &notices[0];
    assert_eq!(opened.title, "Feedback Open for all courses");
    assert_eq!(opened.posted_by, "Admin");
    assert_eq!(opened.importance, 2);
    assert!(opened.target_all_university && opened.target_students && opened.target_faculty);
    assert!(
        opened
            .content
            .contains(&expected_end.format("%B %-d, %Y").to_string())
    );

    assert_eq!(notices[1].title, "Feedback Closed for all courses");
}

#[tokio::test]
async fn test_open_window_with_epoch_milliseconds() {
    let app = app_for(test_db().await);
    let expected_end = midnight(&days_from_now(10));

    let (status, body) = post(
        &app,
        "/api/feedback/admin/set",
        json!({ "active": true, "endDate": expected_end.timestamp_millis() }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isActive"], true);
    let returned_end: DateTime<Utc> =
        serde_json::from_value(body["endDate"].clone()).expect("endDate should be returned");
    assert_eq!(returned_end, expected_end);

    let (_, current) = get(&app, "/api/feedback/admin/status").await;
    let stored_end: DateTime<Utc> =
        serde_json::from_value(current["endDate"].clone()).expect("endDate should be stored");
    assert_eq!(stored_end, expected_end);
}

#[tokio::test]
async fn test_close_ignores_unusable_end_date() {
    let app = app_for(test_db().await);

    let (status, body) = post(
        &app,
        "/api/feedback/admin/set",
        json!({ "active": false, "endDate": { "not": "a date" } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({
        "message": "Feedback status updated",
        "isActive": false,
        "endDate": null
    }));
}
