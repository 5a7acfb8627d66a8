mod common;

use common::TestApp;
use reqwest::header::WWW_AUTHENTICATE;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_vet_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/vets/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@clinic.example",
            "password": "s3cret!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 201);
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["email"], "alice@clinic.example");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("hashed_password").is_none());
}

#[tokio::test]
async fn test_register_vet_duplicate_username() {
    let app = TestApp::spawn().await;
    app.register_vet("alice", "s3cret!").await;

    let response = app
        .post("/vets/register")
        .json(&json!({
            "username": "alice",
            "email": "other@clinic.example",
            "password": "different"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Username already registered");
}

#[tokio::test]
async fn test_register_vet_blank_username() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/vets/register")
        .json(&json!({
            "username": "   ",
            "email": "blank@clinic.example",
            "password": "s3cret!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_register_vet_accepts_short_and_dotted_usernames() {
    let app = TestApp::spawn().await;

    let vet = app.register_vet("dr.smith", "s3cret!").await;
    assert_eq!(vet["username"], "dr.smith");

    let vet = app.register_vet("jo", "s3cret!").await;
    assert_eq!(vet["username"], "jo");

    assert_eq!(app.login("dr.smith", "s3cret!").await.status(), StatusCode::OK);
    assert_eq!(app.login("jo", "s3cret!").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_success_returns_bearer_token() {
    let app = TestApp::spawn().await;
    app.register_vet("alice", "s3cret!").await;

    let response = app.login("alice", "s3cret!").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["token_type"], "bearer");

    let token = body["access_token"].as_str().expect("Missing access_token");
    assert_eq!(
        app.authenticator.validate_token(token).expect("Token should be valid"),
        "alice"
    );
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;
    app.register_vet("alice", "s3cret!").await;

    let response = app.login("alice", "wrong").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body.get("access_token").is_none());
    assert_eq!(body["data"]["message"], "Invalid username or password");
}

#[tokio::test]
async fn test_login_unknown_user_matches_wrong_password() {
    let app = TestApp::spawn().await;

    let response = app.login("nobody", "s3cret!").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid username or password");
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/animals")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(WWW_AUTHENTICATE).map(|v| v.to_str().unwrap()),
        Some("Bearer")
    );
}

#[tokio::test]
async fn test_protected_route_with_garbage_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/animals", "not-a-jwt")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::spawn().await;
    app.register_vet("alice", "s3cret!").await;

    let expired = app
        .authenticator
        .issue_token_with_ttl("alice", chrono::Duration::zero())
        .expect("Failed to issue token");

    let response = app
        .get_authenticated("/animals", &expired.access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_unknown_vet_is_rejected() {
    let app = TestApp::spawn().await;

    let token = app
        .authenticator
        .issue_token("ghost")
        .expect("Failed to issue token");

    let response = app
        .get_authenticated("/animals", &token.access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_animal_round_trip() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "s3cret!").await;

    let id = app.create_animal(&token, "Rex").await;

    let response = app
        .get_authenticated(&format!("/animals/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], id.as_str());
    assert_eq!(body["data"]["name"], "Rex");
    assert_eq!(body["data"]["species"], "Dog");
    assert_eq!(body["data"]["breed"], "Lab");
    assert_eq!(body["data"]["owner"], "Bob");
    assert_eq!(body["data"]["vet_username"], "alice");
}

#[tokio::test]
async fn test_create_animal_ignores_client_vet_username() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "s3cret!").await;

    let response = app
        .post_authenticated("/animals/", &token)
        .json(&json!({
            "name": "Tom",
            "species": "Cat",
            "owner": "Carol",
            "vet_username": "mallory"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["vet_username"], "alice");
    assert!(body["data"]["breed"].is_null());
}

#[tokio::test]
async fn test_animal_fields_are_stored_verbatim() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "s3cret!").await;

    let id = app.create_animal(&token, " Rex ").await;

    let response = app
        .get_authenticated(&format!("/animals/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], " Rex ");
}

#[tokio::test]
async fn test_create_animal_blank_name() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "s3cret!").await;

    let response = app
        .post_authenticated("/animals", &token)
        .json(&json!({
            "name": "  ",
            "species": "Dog",
            "owner": "Bob"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_animals_returns_every_vets_animals() {
    let app = TestApp::spawn().await;
    let alice = app.register_and_login("alice", "s3cret!").await;
    let bob = app.register_and_login("bob", "hunter2").await;

    app.create_animal(&alice, "Rex").await;
    app.create_animal(&bob, "Fido").await;

    let response = app
        .get_authenticated("/animals", &alice)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let names: Vec<&str> = body["data"]
        .as_array()
        .expect("data should be an array")
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Rex"));
    assert!(names.contains(&"Fido"));
}

#[tokio::test]
async fn test_update_animal_by_owner() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "s3cret!").await;
    let id = app.create_animal(&token, "Rex").await;

    let response = app
        .put_authenticated(&format!("/animals/{}", id), &token)
        .json(&json!({
            "name": "Rex II",
            "species": "Dog",
            "breed": "Husky",
            "owner": "Bob"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "Rex II");
    assert_eq!(body["data"]["breed"], "Husky");
    assert_eq!(body["data"]["vet_username"], "alice");
}

#[tokio::test]
async fn test_other_vet_cannot_modify_animal() {
    let app = TestApp::spawn().await;
    let alice = app.register_and_login("alice", "s3cret!").await;
    let bob = app.register_and_login("bob", "hunter2").await;
    let id = app.create_animal(&alice, "Rex").await;

    let update = app
        .put_authenticated(&format!("/animals/{}", id), &bob)
        .json(&json!({
            "name": "Stolen",
            "species": "Dog",
            "owner": "Bob"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(update.status(), StatusCode::FORBIDDEN);

    let delete = app
        .delete_authenticated(&format!("/animals/{}", id), &bob)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete.status(), StatusCode::FORBIDDEN);

    let response = app
        .get_authenticated(&format!("/animals/{}", id), &alice)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "Rex");
}

#[tokio::test]
async fn test_delete_animal() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "s3cret!").await;
    let id = app.create_animal(&token, "Rex").await;

    let response = app
        .delete_authenticated(&format!("/animals/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Animal has been deleted");

    let response = app
        .get_authenticated(&format!("/animals/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_animal() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "s3cret!").await;

    let response = app
        .delete_authenticated(&format!("/animals/{}", uuid::Uuid::new_v4()), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Animal not found");
}

#[tokio::test]
async fn test_malformed_animal_id() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "s3cret!").await;

    let response = app
        .get_authenticated("/animals/not-a-uuid", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_treatment_lifecycle() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "s3cret!").await;
    let animal_id = app.create_animal(&token, "Rex").await;

    let response = app
        .post_authenticated(&format!("/animals/{}/treatments", animal_id), &token)
        .json(&json!({
            "description": "Ear infection",
            "medication": "Otomax",
            "duration": "7 days"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let treatment_id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["animal_id"], animal_id.as_str());
    assert_eq!(body["data"]["vet_username"], "alice");

    let response = app
        .get_authenticated(&format!("/animals/{}/treatments/", animal_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let treatments = body["data"].as_array().expect("data should be an array");
    assert_eq!(treatments.len(), 1);
    assert_eq!(treatments[0]["id"], treatment_id.as_str());

    let response = app
        .delete_authenticated(&format!("/treatments/{}", treatment_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .get_authenticated(&format!("/treatments/{}", treatment_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_treatments_only_for_requested_animal() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "s3cret!").await;
    let rex = app.create_animal(&token, "Rex").await;
    let tom = app.create_animal(&token, "Tom").await;

    for (animal, description) in [(&rex, "Vaccination"), (&tom, "Dental cleaning")] {
        app.post_authenticated(&format!("/animals/{}/treatments", animal), &token)
            .json(&json!({
                "description": description,
                "medication": "None",
                "duration": "1 day"
            }))
            .send()
            .await
            .expect("Failed to execute request");
    }

    let response = app
        .get_authenticated(&format!("/animals/{}/treatments", rex), &token)
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let treatments = body["data"].as_array().expect("data should be an array");
    assert_eq!(treatments.len(), 1);
    assert_eq!(treatments[0]["description"], "Vaccination");
}

#[tokio::test]
async fn test_update_treatment_changes_only_clinical_fields() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "s3cret!").await;
    let animal_id = app.create_animal(&token, "Rex").await;

    let response = app
        .post_authenticated(&format!("/animals/{}/treatments", animal_id), &token)
        .json(&json!({
            "description": "Ear infection",
            "medication": "Otomax",
            "duration": "7 days"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let treatment_id = body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .put_authenticated(&format!("/treatments/{}", treatment_id), &token)
        .json(&json!({
            "medication": "Surolan",
            "duration": "10 days",
            "animal_id": uuid::Uuid::new_v4().to_string(),
            "vet_username": "mallory"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["description"], "Ear infection");
    assert_eq!(body["data"]["medication"], "Surolan");
    assert_eq!(body["data"]["duration"], "10 days");
    assert_eq!(body["data"]["animal_id"], animal_id.as_str());
    assert_eq!(body["data"]["vet_username"], "alice");
}

#[tokio::test]
async fn test_other_vet_cannot_modify_treatment() {
    let app = TestApp::spawn().await;
    let alice = app.register_and_login("alice", "s3cret!").await;
    let bob = app.register_and_login("bob", "hunter2").await;
    let animal_id = app.create_animal(&alice, "Rex").await;

    let response = app
        .post_authenticated(&format!("/animals/{}/treatments", animal_id), &alice)
        .json(&json!({
            "description": "Ear infection",
            "medication": "Otomax",
            "duration": "7 days"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let treatment_id = body["data"]["id"].as_str().unwrap().to_string();

    let update = app
        .put_authenticated(&format!("/treatments/{}", treatment_id), &bob)
        .json(&json!({ "medication": "Placebo" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(update.status(), StatusCode::FORBIDDEN);

    let delete = app
        .delete_authenticated(&format!("/treatments/{}", treatment_id), &bob)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_update_own_vet_account() {
    let app = TestApp::spawn().await;
    let vet = app.register_vet("alice", "s3cret!").await;
    let token = app.token_for("alice", "s3cret!").await;
    let id = vet["id"].as_str().unwrap();

    let response = app
        .put_authenticated(&format!("/vets/{}", id), &token)
        .json(&json!({
            "username": "alice",
            "email": "alice@newclinic.example",
            "password": "n3w-secret"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["email"], "alice@newclinic.example");

    assert_eq!(app.login("alice", "s3cret!").await.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.login("alice", "n3w-secret").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_vet_cannot_update_another_vet() {
    let app = TestApp::spawn().await;
    let alice = app.register_vet("alice", "s3cret!").await;
    let bob = app.register_and_login("bob", "hunter2").await;

    let response = app
        .put_authenticated(&format!("/vets/{}", alice["id"].as_str().unwrap()), &bob)
        .json(&json!({
            "username": "alice",
            "email": "pwned@clinic.example",
            "password": "pwned"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(app.login("alice", "s3cret!").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_vet() {
    let app = TestApp::spawn().await;
    let bob = app.register_vet("bob", "hunter2").await;
    let token = app.register_and_login("alice", "s3cret!").await;
    let path = format!("/vets/{}", bob["id"].as_str().unwrap());

    let response = app
        .delete_authenticated(&path, &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Vet has been deleted");

    let response = app
        .delete_authenticated(&path, &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_vet_cannot_change_username() {
    let app = TestApp::spawn().await;
    let vet = app.register_vet("alice", "s3cret!").await;
    let token = app.token_for("alice", "s3cret!").await;
    let id = vet["id"].as_str().unwrap();
    let animal_id = app.create_animal(&token, "Rex").await;

    let response = app
        .put_authenticated(&format!("/vets/{}", id), &token)
        .json(&json!({
            "username": "alicia",
            "email": "alice@clinic.example",
            "password": "s3cret!"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Username cannot be changed");

    // The name stays taken and the records stay with their vet.
    let response = app
        .post("/vets/register")
        .json(&json!({
            "username": "alice",
            "email": "impostor@clinic.example",
            "password": "hunter2"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .put_authenticated(&format!("/animals/{}", animal_id), &token)
        .json(&json!({
            "name": "Rex",
            "species": "Dog",
            "owner": "Bob"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_reregistered_username_does_not_inherit_records() {
    let app = TestApp::spawn().await;
    let original = app.register_vet("alice", "s3cret!").await;
    let token = app.token_for("alice", "s3cret!").await;
    let animal_id = app.create_animal(&token, "Rex").await;

    let response = app
        .post_authenticated(&format!("/animals/{}/treatments", animal_id), &token)
        .json(&json!({
            "description": "Ear infection",
            "medication": "Otomax",
            "duration": "7 days"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let treatment_id = body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .delete_authenticated(
            &format!("/vets/{}", original["id"].as_str().unwrap()),
            &token,
        )
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let newcomer = app.register_and_login("alice", "hunter2").await;

    let update = app
        .put_authenticated(&format!("/animals/{}", animal_id), &newcomer)
        .json(&json!({
            "name": "Taken",
            "species": "Dog",
            "owner": "Mallory"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(update.status(), StatusCode::FORBIDDEN);

    let delete = app
        .delete_authenticated(&format!("/animals/{}", animal_id), &newcomer)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete.status(), StatusCode::FORBIDDEN);

    let delete = app
        .delete_authenticated(&format!("/treatments/{}", treatment_id), &newcomer)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete.status(), StatusCode::FORBIDDEN);

    let response = app
        .get_authenticated(&format!("/animals/{}", animal_id), &newcomer)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "Rex");
    assert_eq!(body["data"]["vet_id"], original["id"]);
}
