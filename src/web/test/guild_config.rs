use super::*;

fn post(guild_id: u64, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/api/guild/{}", guild_id))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn settings() -> Value {
    json!({
        "welcome_message_text": "Hi {user}!",
        "module_welcome": false,
        "module_economy": true,
        "module_music": false,
        "module_tickets": true,
        "module_automod": false,
        "theme": "dark"
    })
}

/// Tests that reading an unknown guild creates its default configuration.
///
/// Expected: 200 with every module enabled
#[tokio::test]
async fn get_creates_default_config() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db, PathBuf::from("static"))
        .oneshot(
            Request::builder()
                .uri("/api/guild/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["guild_id"], "42");
    assert_eq!(body["module_welcome"], true);
    assert_eq!(body["module_music"], true);
}

/// Tests saving settings of an existing guild.
///
/// Expected: 200 with the success acknowledgement and the fields written
#[tokio::test]
async fn post_saves_settings() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("7")
        .build()
        .await
        .unwrap();

    let response = app(db, PathBuf::from("static"))
        .oneshot(post(7, settings()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"status": "success", "message": "Settings saved!"})
    );

    let response = app(db, PathBuf::from("static"))
        .oneshot(
            Request::builder()
                .uri("/api/guild/7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;

    assert_eq!(body["welcome_message_text"], "Hi {user}!");
    assert_eq!(body["module_welcome"], false);
    assert_eq!(body["module_music"], false);
    assert_eq!(body["module_levels"], true);
}

/// Tests saving settings of a guild that has no configuration.
///
/// Expected: 404 with an error body
#[tokio::test]
async fn post_unknown_guild_is_not_found() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db, PathBuf::from("static"))
        .oneshot(post(99, settings()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_json(response).await["error"].is_string());
}

/// Tests that the OpenAPI document lists the guild endpoints.
///
/// Expected: 200 with the guild path present
#[tokio::test]
async fn serves_openapi_document() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db, PathBuf::from("static"))
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["paths"]["/api/guild/{guild_id}"]["get"].is_object());
    assert!(body["paths"]["/api/guild/{guild_id}"]["post"].is_object());
}
