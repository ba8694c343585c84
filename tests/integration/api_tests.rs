//! API integration tests against a running server with a migrated database

use reqwest::{multipart, Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3000";

/// Sign up a fresh account and return its id
async fn create_user(client: &Client, role: &str) -> i64 {
    let email = format!("{}-{}@example.com", role, uuid::Uuid::new_v4());

    let response = client
        .post(format!("{}/signup", BASE_URL))
        .json(&json!({
            "username": format!("{}-tester", role),
            "email": email,
            "password": "secret",
            "role": role
        }))
        .send()
        .await
        .expect("Failed to send signup request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({ "email": email, "password": "secret" }))
        .send()
        .await
        .expect("Failed to send login request");
    let body: Value = response.json().await.expect("Failed to parse login response");
    body["user"]["id"].as_i64().expect("No user id in login response")
}

/// Add a place as the given admin and return its id
async fn create_place(client: &Client, admin_id: i64, title: &str, rating: &str) -> i64 {
    let image = multipart::Part::bytes(vec![0xff, 0xd8, 0xff])
        .file_name("place.jpg")
        .mime_str("image/jpeg")
        .unwrap();
    let form = multipart::Form::new()
        .text("title", title.to_string())
        .text("description", "Integration test place")
        .text("location", "Somewhere")
        .text("rating", rating.to_string())
        .text("userId", admin_id.to_string())
        .part("image", image);

    let response = client
        .post(format!("{}/add-place", BASE_URL))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send add-place request");
    assert_eq!(response.status(), StatusCode::OK);

    let places = get_json(client, "/places").await;
    places
        .as_array()
        .expect("places is not an array")
        .iter()
        .find(|p| p["title"] == title)
        .and_then(|p| p["id"].as_i64())
        .expect("Created place not listed")
}

async fn get_json(client: &Client, path: &str) -> Value {
    let response = client
        .get(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.expect("Failed to parse response")
}

async fn toggle_like(client: &Client, place_id: i64, user_id: i64) -> Value {
    let response = client
        .post(format!("{}/like-place", BASE_URL))
        .json(&json!({ "placeId": place_id, "userId": user_id }))
        .send()
        .await
        .expect("Failed to send like request");
    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.expect("Failed to parse response")
}

fn unique_title(prefix: &str) -> String {
    format!("{} {}", prefix, uuid::Uuid::new_v4())
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_signup_then_login_returns_role() {
    let client = Client::new();

    for role in ["user", "admin"] {
        let email = format!("{}-{}@example.com", role, uuid::Uuid::new_v4());
        let response = client
            .post(format!("{}/signup", BASE_URL))
            .json(&json!({
                "username": "roundtrip",
                "email": email,
                "password": "pa55word",
                "role": role
            }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::OK);

        let response = client
            .post(format!("{}/login", BASE_URL))
            .json(&json!({ "email": email, "password": "pa55word" }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["message"], "Login successful");
        assert_eq!(body["user"]["role"], role);
        assert!(body["user"].get("password").is_none());
    }
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();
    let email = format!("user-{}@example.com", uuid::Uuid::new_v4());

    client
        .post(format!("{}/signup", BASE_URL))
        .json(&json!({ "username": "u", "email": email, "password": "right", "role": "user" }))
        .send()
        .await
        .expect("Failed to send request");

    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({ "email": email, "password": "wrong" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
#[ignore]
async fn test_signup_duplicate_email_fails_with_details() {
    let client = Client::new();
    let email = format!("dup-{}@example.com", uuid::Uuid::new_v4());
    let payload = json!({ "username": "dup", "email": email, "password": "pw", "role": "user" });

    let first = client
        .post(format!("{}/signup", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(first.status(), StatusCode::OK);

    let second = client
        .post(format!("{}/signup", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let body: Value = second.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Signup failed");
    assert!(body["details"].as_str().unwrap_or_default().contains("duplicate"));
}

#[tokio::test]
#[ignore]
async fn test_like_toggle_round_trip() {
    let client = Client::new();
    let admin = create_user(&client, "admin").await;
    let user = create_user(&client, "user").await;
    let place = create_place(&client, admin, &unique_title("Toggle"), "3.0").await;

    let status = get_json(&client, &format!("/like-status/{}/{}", place, user)).await;
    assert_eq!(status["isLiked"], false);

    let first = toggle_like(&client, place, user).await;
    assert_eq!(first["message"], "Place liked successfully");
    let status = get_json(&client, &format!("/like-status/{}/{}", place, user)).await;
    assert_eq!(status["isLiked"], true);

    let second = toggle_like(&client, place, user).await;
    assert_eq!(second["message"], "Place unliked successfully");
    let status = get_json(&client, &format!("/like-status/{}/{}", place, user)).await;
    assert_eq!(status["isLiked"], false);

    let third = toggle_like(&client, place, user).await;
    assert_eq!(third["isLiked"], true);
}

#[tokio::test]
#[ignore]
async fn test_delete_place() {
    let client = Client::new();
    let admin = create_user(&client, "admin").await;
    let place = create_place(&client, admin, &unique_title("Doomed"), "1.0").await;

    let response = client
        .delete(format!("{}/delete-place/{}", BASE_URL, i32::MAX))
        .json(&json!({ "userId": admin }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .delete(format!("{}/delete-place/{}", BASE_URL, place))
        .json(&json!({ "userId": admin }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let places = get_json(&client, "/places").await;
    assert!(places
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["id"].as_i64() != Some(place)));
}

#[tokio::test]
#[ignore]
async fn test_top_places_filter() {
    let client = Client::new();
    let admin = create_user(&client, "admin").await;

    let popular = create_place(&client, admin, &unique_title("Popular"), "2.0").await;
    for _ in 0..5 {
        let fan = create_user(&client, "user").await;
        toggle_like(&client, popular, fan).await;
    }

    let lukewarm = create_place(&client, admin, &unique_title("Lukewarm"), "3.9").await;
    let fan = create_user(&client, "user").await;
    toggle_like(&client, lukewarm, fan).await;

    let top = get_json(&client, "/top-places").await;
    let top = top.as_array().unwrap();

    let entry = top
        .iter()
        .find(|p| p["id"].as_i64() == Some(popular))
        .expect("Popular place missing from top places");
    assert_eq!(entry["like_count"], 5);
    assert!(top.iter().all(|p| p["id"].as_i64() != Some(lukewarm)));
}

#[tokio::test]
#[ignore]
async fn test_non_admin_is_forbidden() {
    let client = Client::new();
    let admin = create_user(&client, "admin").await;
    let user = create_user(&client, "user").await;
    let place = create_place(&client, admin, &unique_title("Guarded"), "4.0").await;

    let image = multipart::Part::bytes(vec![1, 2, 3]).file_name("x.jpg");
    let response = client
        .post(format!("{}/add-place", BASE_URL))
        .multipart(
            multipart::Form::new()
                .text("title", "Nope")
                .text("userId", user.to_string())
                .part("image", image),
        )
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = client
        .post(format!("{}/add-agency", BASE_URL))
        .multipart(
            multipart::Form::new()
                .text("name", "Nope Travel")
                .text("userId", user.to_string()),
        )
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = client
        .delete(format!("{}/delete-place/{}", BASE_URL, place))
        .json(&json!({ "userId": user }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = client
        .post(format!("{}/add-tour-schedule", BASE_URL))
        .json(&json!({
            "agencyId": 1,
            "placeId": place,
            "tourDate": "2030-01-01",
            "price": 10,
            "userId": user
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = client
        .post(format!("{}/add-comment-reply", BASE_URL))
        .json(&json!({ "commentId": 1, "reply": "hi", "userId": user }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore]
async fn test_agency_and_tour_schedules() {
    let client = Client::new();
    let admin = create_user(&client, "admin").await;
    let place = create_place(&client, admin, &unique_title("Harbor"), "4.2").await;
    let name = unique_title("Agency");

    let response = client
        .post(format!("{}/add-agency", BASE_URL))
        .multipart(
            multipart::Form::new()
                .text("name", name.clone())
                .text("contact", "desk@example.com")
                .text("userId", admin.to_string()),
        )
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let agencies = get_json(&client, "/agencies").await;
    let agency = agencies
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["name"] == name.as_str())
        .and_then(|a| a["id"].as_i64())
        .expect("Created agency not listed");

    for date in ["2030-03-01", "2030-01-15"] {
        let response = client
            .post(format!("{}/add-tour-schedule", BASE_URL))
            .json(&json!({
                "agencyId": agency,
                "placeId": place,
                "tourDate": date,
                "price": 99.5,
                "description": "Boat tour",
                "userId": admin
            }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let schedules = get_json(&client, &format!("/tour-schedules/{}", agency)).await;
    let schedules = schedules.as_array().unwrap();
    assert_eq!(schedules.len(), 2);
    assert_eq!(schedules[0]["tour_date"], "2030-01-15");
    assert_eq!(schedules[1]["tour_date"], "2030-03-01");
    assert!(schedules[0]["place_title"].as_str().unwrap().starts_with("Harbor"));
}

#[tokio::test]
#[ignore]
async fn test_comments_are_threaded() {
    let client = Client::new();
    let admin = create_user(&client, "admin").await;
    let user = create_user(&client, "user").await;
    let place = create_place(&client, admin, &unique_title("Chatty"), "3.5").await;

    for text in ["first", "second"] {
        let response = client
            .post(format!("{}/add-comment", BASE_URL))
            .json(&json!({ "placeId": place, "comment": text, "userId": user }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let comments = get_json(&client, &format!("/comments/{}", place)).await;
    let first_id = comments
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["comment"] == "first")
        .and_then(|c| c["id"].as_i64())
        .expect("Comment missing");

    for text in ["reply one", "reply two"] {
        let response = client
            .post(format!("{}/add-comment-reply", BASE_URL))
            .json(&json!({ "commentId": first_id, "reply": text, "userId": admin }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let comments = get_json(&client, &format!("/comments/{}", place)).await;
    let comments = comments.as_array().unwrap();
    assert_eq!(comments.len(), 2);

    // Newest comment first
    assert_eq!(comments[0]["comment"], "second");
    assert!(comments[0]["replies"].as_array().unwrap().is_empty());

    // Replies oldest first
    assert_eq!(comments[1]["comment"], "first");
    let replies = comments[1]["replies"].as_array().unwrap();
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0]["reply"], "reply one");
    assert_eq!(replies[1]["reply"], "reply two");
    assert_eq!(replies[0]["username"], "admin-tester");
}
