use super::*;

fn temp_static_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("dreamclub-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Tests that unknown paths fall back to the frontend entry point.
///
/// Expected: 200 with the contents of index.html
#[tokio::test]
async fn unknown_paths_serve_index() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dir = temp_static_dir("spa");
    std::fs::write(dir.join("index.html"), "<h1>Dream Club</h1>").unwrap();

    let response = app(db, dir)
        .oneshot(
            Request::builder()
                .uri("/guilds/42/settings")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"<h1>Dream Club</h1>");
}

/// Tests the fallback when no frontend was built.
///
/// Expected: 404 with an error body
#[tokio::test]
async fn missing_frontend_is_not_found() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db, temp_static_dir("empty"))
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_json(response).await["error"].is_string());
}
