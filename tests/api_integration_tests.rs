//! Integration Tests for the API client and REPL session
//!
//! Runs against an in-process fake PokeAPI that counts the requests it
//! serves, so cache hits are observable as requests that never arrive.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pokedex::{Flow, PokeApiClient, PokedexError, Session, TtlCache};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use serde_json::json;

// == Fake PokeAPI ==

#[derive(Clone)]
struct FakeApi {
    base_url: String,
    requests: Arc<AtomicUsize>,
}

#[derive(Deserialize)]
struct PageQuery {
    offset: Option<usize>,
}

const AREAS: [&str; 4] = ["area-0", "area-1", "area-2", "area-3"];
const PAGE_SIZE: usize = 2;

async fn location_page(State(api): State<FakeApi>, Query(query): Query<PageQuery>) -> Response {
    api.requests.fetch_add(1, Ordering::SeqCst);
    let offset = query.offset.unwrap_or(0);
    let page_url = |offset: usize| format!("{}/location-area?offset={}", api.base_url, offset);

    let results: Vec<_> = AREAS
        .iter()
        .skip(offset)
        .take(PAGE_SIZE)
        .map(|name| json!({ "name": name, "url": format!("{}/location-area/{}/", api.base_url, name) }))
        .collect();
    let next = (offset + PAGE_SIZE < AREAS.len()).then(|| page_url(offset + PAGE_SIZE));
    let previous = (offset > 0).then(|| page_url(offset.saturating_sub(PAGE_SIZE)));

    Json(json!({
        "count": AREAS.len(),
        "next": next,
        "previous": previous,
        "results": results,
    }))
    .into_response()
}

async fn location_area(State(api): State<FakeApi>, Path(name): Path<String>) -> Response {
    api.requests.fetch_add(1, Ordering::SeqCst);
    match name.as_str() {
        "canalave-city-area" => Json(json!({
            "name": "canalave-city-area",
            "pokemon_encounters": [
                { "pokemon": { "name": "tentacool", "url": "" } },
                { "pokemon": { "name": "staryu", "url": "" } }
            ]
        }))
        .into_response(),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

async fn pokemon(State(api): State<FakeApi>, Path(name): Path<String>) -> Response {
    api.requests.fetch_add(1, Ordering::SeqCst);
    match name.as_str() {
        "caterpie" => Json(json!({
            "name": "caterpie",
            "base_experience": 39,
            "height": 3,
            "weight": 29,
            "stats": [
                { "base_stat": 45, "effort": 1, "stat": { "name": "hp", "url": "" } },
                { "base_stat": 30, "effort": 0, "stat": { "name": "attack", "url": "" } }
            ],
            "types": [
                { "slot": 1, "type": { "name": "bug", "url": "" } }
            ]
        }))
        .into_response(),
        "glitch" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

/// Starts the fake API and returns its base URL and request counter.
async fn spawn_fake_api() -> (String, Arc<AtomicUsize>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/api/v2", listener.local_addr().unwrap());
    let requests = Arc::new(AtomicUsize::new(0));

    let state = FakeApi {
        base_url: base_url.clone(),
        requests: requests.clone(),
    };
    let app = Router::new()
        .route("/api/v2/location-area", get(location_page))
        .route("/api/v2/location-area/:name/", get(location_area))
        .route("/api/v2/pokemon/:name/", get(pokemon))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (base_url, requests)
}

// == Helper Functions ==

async fn create_test_client(ttl: Duration) -> (PokeApiClient, Arc<AtomicUsize>) {
    let (base_url, requests) = spawn_fake_api().await;
    // Bypass any proxy from the environment
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    let cache = TtlCache::new(ttl).unwrap();
    (PokeApiClient::with_http(http, base_url, cache), requests)
}

async fn create_test_session() -> (Session, Arc<AtomicUsize>) {
    let (client, requests) = create_test_client(Duration::from_secs(300)).await;
    (Session::with_rng(client, StdRng::seed_from_u64(42)), requests)
}

async fn run(session: &mut Session, line: &str) -> String {
    let mut out = Vec::new();
    let flow = session.execute(line, &mut out).await.unwrap();
    assert_eq!(flow, Flow::Continue);
    String::from_utf8(out).unwrap()
}

// == Client Tests ==

#[tokio::test]
async fn test_successful_response_is_cached() {
    let (client, requests) = create_test_client(Duration::from_secs(300)).await;

    let first = client.location_area("canalave-city-area").await.unwrap();
    let second = client.location_area("canalave-city-area").await.unwrap();

    assert_eq!(first.name, second.name);
    assert_eq!(requests.load(Ordering::SeqCst), 1);
    assert_eq!(client.cache().len(), 1);
    assert_eq!(client.cache().stats().hits, 1);
}

#[tokio::test]
async fn test_cache_key_is_request_url() {
    let (client, _) = create_test_client(Duration::from_secs(300)).await;

    client.location_area("canalave-city-area").await.unwrap();

    let key = format!("{}/location-area/canalave-city-area/", client.base_url());
    let body = client.cache().get(&key).expect("body cached under its URL");
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["name"], "canalave-city-area");
}

#[tokio::test]
async fn test_failed_response_is_not_cached() {
    let (client, requests) = create_test_client(Duration::from_secs(300)).await;

    for _ in 0..2 {
        let result = client.location_area("nowhere").await;
        assert!(matches!(
            result,
            Err(PokedexError::Status { status: 404, .. })
        ));
    }

    assert_eq!(requests.load(Ordering::SeqCst), 2);
    assert!(client.cache().is_empty());
}

#[tokio::test]
async fn test_pokemon_not_found() {
    let (client, _) = create_test_client(Duration::from_secs(300)).await;

    let result = client.pokemon("MissingNo").await;
    match result {
        Err(PokedexError::PokemonNotFound(name)) => assert_eq!(name, "missingno"),
        other => panic!("expected PokemonNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_reports_status_and_body() {
    let (client, _) = create_test_client(Duration::from_secs(300)).await;

    let err = client.pokemon("glitch").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "response failed with status code: 500 and body: boom"
    );
}

#[tokio::test]
async fn test_expired_response_is_refetched() {
    let (client, requests) = create_test_client(Duration::from_millis(100)).await;

    client.location_area("canalave-city-area").await.unwrap();
    tokio::time::sleep(Duration::from_millis(350)).await;
    client.location_area("canalave-city-area").await.unwrap();

    assert_eq!(requests.load(Ordering::SeqCst), 2);
}

// == Session Tests ==

#[tokio::test]
async fn test_map_paging_forward_and_back() {
    let (mut session, requests) = create_test_session().await;

    assert_eq!(run(&mut session, "map").await, "area-0\narea-1\n");
    assert_eq!(run(&mut session, "map").await, "area-2\narea-3\n");
    assert_eq!(run(&mut session, "mapb").await, "area-0\narea-1\n");
    assert_eq!(run(&mut session, "mapb").await, "you're on the first page\n");
    assert_eq!(requests.load(Ordering::SeqCst), 3);

    // Second page is already cached under its URL
    assert_eq!(run(&mut session, "map").await, "area-2\narea-3\n");
    assert_eq!(requests.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_explore_lists_encounters() {
    let (mut session, requests) = create_test_session().await;

    let expected = "Exploring canalave-city-area...\nFound Pokemon:\n- tentacool\n- staryu\n";
    assert_eq!(run(&mut session, "explore Canalave-City-Area").await, expected);
    assert_eq!(run(&mut session, "explore canalave-city-area").await, expected);
    assert_eq!(requests.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_catch_then_inspect() {
    let (mut session, requests) = create_test_session().await;

    assert_eq!(
        run(&mut session, "inspect caterpie").await,
        "you have not caught that pokemon\n"
    );

    let mut attempts = 0;
    while session.caught("caterpie").is_none() {
        attempts += 1;
        assert!(attempts <= 50, "caterpie should be caught eventually");

        let output = run(&mut session, "catch caterpie").await;
        assert!(output.starts_with("Throwing a Pokeball at caterpie...\n"));
        assert!(output.ends_with("caterpie was caught!\n") || output.ends_with("caterpie escaped!\n"));
    }

    // Every retry after the first is served from the cache
    assert_eq!(requests.load(Ordering::SeqCst), 1);

    let expected = "Name: caterpie\nHeight: 3\nWeight: 29\nStats:\n  -hp: 45\n  -attack: 30\nTypes:\n  - bug\n";
    assert_eq!(run(&mut session, "inspect caterpie").await, expected);
}

#[tokio::test]
async fn test_command_errors() {
    let (mut session, _) = create_test_session().await;
    let mut out = Vec::new();

    let err = session.execute("catch", &mut out).await.unwrap_err();
    assert_eq!(err.to_string(), "requires a valid pokemon name");

    let err = session.execute("inspect", &mut out).await.unwrap_err();
    assert_eq!(err.to_string(), "you must provide a pokemon name");

    let err = session.execute("explore", &mut out).await.unwrap_err();
    assert!(matches!(err, PokedexError::MissingArgument(_)));

    let err = session.execute("catch missingno", &mut out).await.unwrap_err();
    assert_eq!(err.to_string(), "Pokemon 'missingno' not found");

    assert!(out.is_empty());
}
