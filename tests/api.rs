mod common;

use happyteeth::notify::Delivery;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::spawn;

fn sarah() -> Value {
    json!({
        "name": "Sarah Johnson",
        "phone": "+1-555-0123",
        "email": "sarah@x.com",
        "date": "2025-01-10",
        "service": "Dental Cleaning",
    })
}

#[tokio::test]
async fn health_check_answers_with_and_without_slash() {
    let app = spawn(Delivery::Sent).await;

    for path in ["/api", "/api/"] {
        let response = app.client.get(app.url(path)).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "message": "Happy Teeth Dental Clinic API", "status": "active" }));
    }
}

#[tokio::test]
async fn appointment_lifecycle() {
    let app = spawn(Delivery::Sent).await;

    let created: Value = app.client.post(app.url("/api/appointments"))
        .json(&sarah())
        .send().await.unwrap()
        .json().await.unwrap();
    assert_eq!(created["status"], "pending");
    assert_eq!(created["name"], "Sarah Johnson");
    assert_eq!(created["time"], Value::Null);
    assert!(created["createdAt"].as_str().unwrap().starts_with("20"));
    let id = created["id"].as_str().unwrap().to_owned();

    let listed: Value = app.client.get(app.url("/api/appointments"))
        .send().await.unwrap()
        .json().await.unwrap();
    assert_eq!(listed, json!([created.clone()]));

    let response = app.client.patch(app.url(&format!("/api/appointments/{id}/status")))
        .json(&json!({ "status": "confirmed" }))
        .send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let confirmed: Value = response.json().await.unwrap();
    assert_eq!(confirmed["status"], "confirmed");
    assert_eq!(confirmed["createdAt"], created["createdAt"]);
    assert_eq!(app.notifier.recipients(), vec!["sarah@x.com".to_owned()]);

    let response = app.client.delete(app.url(&format!("/api/appointments/{id}")))
        .send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Appointment deleted successfully" }));

    let listed: Value = app.client.get(app.url("/api/appointments"))
        .send().await.unwrap()
        .json().await.unwrap();
    assert_eq!(listed, json!([]));

    let response = app.client.delete(app.url(&format!("/api/appointments/{id}")))
        .send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "detail": "Appointment not found" }));
}

#[tokio::test]
async fn failed_email_still_confirms() {
    let app = spawn(Delivery::Failed("relay down".into())).await;

    let created: Value = app.client.post(app.url("/api/appointments"))
        .json(&sarah())
        .send().await.unwrap()
        .json().await.unwrap();

    let response = app.client.patch(app.url(&format!("/api/appointments/{}/status", created["id"].as_str().unwrap())))
        .json(&json!({ "status": "confirmed" }))
        .send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.notifier.recipients().len(), 1);
}

#[tokio::test]
async fn status_of_unknown_appointment_is_not_found() {
    let app = spawn(Delivery::Sent).await;

    let response = app.client.patch(app.url("/api/appointments/nope/status"))
        .json(&json!({ "status": "cancelled" }))
        .send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(app.notifier.recipients().is_empty());
}

#[tokio::test]
async fn malformed_bodies_are_bad_requests() {
    let app = spawn(Delivery::Sent).await;

    let missing_phone = json!({ "name": "x", "date": "2025-01-10", "service": "Checkup" });
    let response = app.client.post(app.url("/api/appointments"))
        .json(&missing_phone)
        .send().await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("phone"));

    let response = app.client.post(app.url("/api/gallery"))
        .json(&json!({ "url": "u", "title": "t", "category": "lobby" }))
        .send().await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.client.post(app.url("/api/appointments"))
        .header("content-type", "application/json")
        .body("{not json")
        .send().await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let listed: Value = app.client.get(app.url("/api/appointments"))
        .send().await.unwrap()
        .json().await.unwrap();
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn invalid_status_is_rejected_before_lookup() {
    let app = spawn(Delivery::Sent).await;

    let response = app.client.patch(app.url("/api/appointments/nope/status"))
        .json(&json!({ "status": "done" }))
        .send().await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn gallery_create_list_delete() {
    let app = spawn(Delivery::Sent).await;

    let mut ids = Vec::new();
    for (title, category) in [("Lobby", "clinic"), ("Team", "team")] {
        let image: Value = app.client.post(app.url("/api/gallery"))
            .json(&json!({ "url": format!("https://img.example.com/{title}"), "title": title, "category": category }))
            .send().await.unwrap()
            .json().await.unwrap();
        assert_eq!(image["category"], category);
        ids.push(image["id"].as_str().unwrap().to_owned());
    }

    let listed: Value = app.client.get(app.url("/api/gallery"))
        .send().await.unwrap()
        .json().await.unwrap();
    let titles: Vec<&str> = listed.as_array().unwrap().iter().map(|i| i["title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["Team", "Lobby"]);

    let response = app.client.delete(app.url(&format!("/api/gallery/{}", ids[0])))
        .send().await.unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Image deleted successfully" }));

    let response = app.client.delete(app.url(&format!("/api/gallery/{}", ids[0])))
        .send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "detail": "Image not found" }));
}

#[tokio::test]
async fn admin_login_and_password_change() {
    let app = spawn(Delivery::Sent).await;
    let login = |password: &'static str| {
        app.client.post(app.url("/api/admin/login"))
            .json(&json!({ "username": "admin", "password": password }))
            .send()
    };

    let response = login("admin123").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "success": true, "message": "Login successful" }));

    let response = login("wrong").await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "detail": "Invalid credentials" }));

    let response = app.client.post(app.url("/api/admin/change-password"))
        .json(&json!({ "username": "admin", "old_password": "wrong", "new_password": "n3w" }))
        .send().await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "detail": "Current password is incorrect" }));

    let response = app.client.post(app.url("/api/admin/change-password"))
        .json(&json!({ "username": "admin", "old_password": "admin123", "new_password": "n3w" }))
        .send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);

    assert_eq!(login("n3w").await.unwrap().status(), StatusCode::OK);
    assert_eq!(login("admin123").await.unwrap().status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_admin_is_unauthorized() {
    let app = spawn(Delivery::Sent).await;

    let response = app.client.post(app.url("/api/admin/login"))
        .json(&json!({ "username": "root", "password": "admin123" }))
        .send().await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
