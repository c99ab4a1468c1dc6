mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore] // Requires running MongoDB
async fn assigned_view_only_returns_that_users_tasks() {
    let app = TestApp::spawn().await;

    let user_id = app.create_user("lin@example.com").await;

    let response = app
        .client
        .post(format!("{}/myTasks/{}", app.address, user_id))
        .json(&json!({ "title": "review PR" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    // Unassigned task, must not show up in the per-user view
    app.create_task(&json!({ "title": "sweep floor" })).await;

    let tasks: Vec<serde_json::Value> = app
        .client
        .get(format!("{}/myTasks/{}", app.address, user_id))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], json!("review PR"));
    assert_eq!(tasks[0]["assignedTo"], json!(user_id));

    app.cleanup().await;
}

#[tokio::test]
#[ignore] // Requires running MongoDB
async fn creating_for_unknown_user_is_404_and_inserts_nothing() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!(
            "{}/myTasks/ffffffffffffffffffffffff",
            app.address
        ))
        .json(&json!({ "title": "orphan task" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], json!("User not found"));

    let tasks: Vec<serde_json::Value> = app
        .client
        .get(format!("{}/tasks", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert!(tasks.is_empty());

    app.cleanup().await;
}

#[tokio::test]
#[ignore] // Requires running MongoDB
async fn assignment_is_stamped_server_side() {
    let app = TestApp::spawn().await;

    let user_id = app.create_user("mo@example.com").await;

    // A body claiming a different assignee is overridden by the path
    let response = app
        .client
        .post(format!("{}/myTasks/{}", app.address, user_id))
        .json(&json!({ "title": "file taxes", "assignedTo": "someone-else" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let task_id = body["insertedId"].as_str().expect("insertedId missing");

    let task: serde_json::Value = app
        .client
        .get(format!("{}/task/{}", app.address, task_id))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(task["assignedTo"], json!(user_id));

    app.cleanup().await;
}
