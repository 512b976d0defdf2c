use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::util::ServiceExt;

use glossbridge_core::{Glossary, NOT_FOUND, Translator};
use glossbridge_morph::FrenchLemmatizer;
use glossbridge_server::handlers::{AppState, router};
use glossbridge_types::{IdentityLemmatizer, Language};

fn make_state(disable_cache: bool) -> AppState {
    let tempdir = tempfile::tempdir().unwrap();
    let en_fr_path = tempdir.path().join("en-fr.txt");
    let fr_en_path = tempdir.path().join("fr-en.txt");
    std::fs::write(
        &en_fr_path,
        "cat {n} /kæt/ :: chat {m}\neat {v} /iːt/ :: manger\n",
    )
    .unwrap();
    std::fs::write(&fr_en_path, "chat {m} /ʃa/ :: cat\nmanger {v} :: to eat\n").unwrap();

    let translator = Translator::new(
        Glossary::load(&en_fr_path).unwrap(),
        Glossary::load(&fr_en_path).unwrap(),
        Arc::new(IdentityLemmatizer(Language::English)),
        Arc::new(FrenchLemmatizer::from_pairs([("mangeons", "manger")])),
    );
    AppState {
        translator: Arc::new(translator),
        disable_cache,
    }
}

async fn get_json(state: AppState, uri: &str) -> (StatusCode, Option<String>, serde_json::Value) {
    let response = router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let cache = response
        .headers()
        .get(header::CACHE_CONTROL)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body_bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let body = serde_json::from_slice(&body_bytes).unwrap();
    (status, cache, body)
}

#[tokio::test]
async fn healthz_ok() {
    let app = router(make_state(false));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn translate_returns_tagged_lines() {
    let (status, cache, body) = get_json(make_state(false), "/translate?word=Cat").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translation"], "EN -> FR: cat {n} :: chat {m}");
    assert_eq!(cache.as_deref(), Some("public, max-age=300"));
}

#[tokio::test]
async fn translate_uses_french_lemmas() {
    let (status, _, body) = get_json(make_state(false), "/translate?word=mangeons").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translation"], "FR -> EN: manger {v} :: to eat");
}

#[tokio::test]
async fn unknown_word_is_a_successful_not_found() {
    let (status, _, body) = get_json(make_state(false), "/translate?word=zzznotaword").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translation"], NOT_FOUND);
}

#[tokio::test]
async fn missing_word_is_a_client_error() {
    for uri in ["/translate", "/translate?word=", "/translate?word=%20%20"] {
        let (status, _, body) = get_json(make_state(false), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "No word provided");
    }
}

#[tokio::test]
async fn cache_headers_can_be_disabled() {
    let (status, cache, _) = get_json(make_state(true), "/translate?word=cat").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache, None);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = router(make_state(false));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/translate?word=cat")
                .header(header::ORIGIN, "https://example.org")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
