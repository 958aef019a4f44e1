mod common;

use common::{content_type, TestServer};
use dormitory::config::DEFAULT_MAX_BODY_BYTES;
use dormitory::{resource_app, Booking, Resource, ResourceStore, Room, Student};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;

async fn spawn_seeded<R: Resource>() -> TestServer {
    let store = Arc::new(ResourceStore::<R>::seeded());
    TestServer::spawn(resource_app(store, DEFAULT_MAX_BODY_BYTES)).await
}

#[tokio::test]
async fn health_identifies_the_service() {
    let server = spawn_seeded::<Room>().await;
    let res = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"status": "ok", "service": "room-service"}));
}

#[tokio::test]
async fn create_student_continues_seed_ids() {
    let server = spawn_seeded::<Student>().await;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/students"))
        .json(&json!({"name": "Carol", "email": "c@x.com"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(content_type(&res).as_deref(), Some("application/json"));
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["id"], 3);
    assert_eq!(created["roomId"], Value::Null);

    let fetched: Value = client
        .get(server.url("/students/3"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    let all: Vec<Value> = client.get(server.url("/students")).send().await.unwrap().json().await.unwrap();
    let ids: Vec<_> = all.iter().map(|s| s["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[tokio::test]
async fn create_rejects_incomplete_or_malformed_bodies() {
    let server = spawn_seeded::<Student>().await;
    let client = reqwest::Client::new();

    for body in [r#"{"name":"Carol"}"#, r#"{"name":"","email":"c@x.com"}"#, "{not json", "", r#"{"name":5}"#] {
        let res = client
            .post(server.url("/students"))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body {body:?}");
        let err: Value = res.json().await.unwrap();
        assert_eq!(err, json!({"error": "name and email are required"}));
    }

    let all: Vec<Value> = client.get(server.url("/students")).send().await.unwrap().json().await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn create_ignores_content_type() {
    let server = spawn_seeded::<Room>().await;
    let res = reqwest::Client::new()
        .post(server.url("/rooms"))
        .header("content-type", "text/plain")
        .body(r#"{"number":"301","type":"suite","capacity":3}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let room: Value = res.json().await.unwrap();
    assert_eq!(room, json!({"id": 4, "number": "301", "type": "suite", "capacity": 3, "available": true}));
}

#[tokio::test]
async fn id_routes_distinguish_bad_and_unknown_ids() {
    let server = spawn_seeded::<Student>().await;
    let client = reqwest::Client::new();

    for (method, path) in [
        (reqwest::Method::GET, "/students/abc"),
        (reqwest::Method::PUT, "/students/abc"),
        (reqwest::Method::DELETE, "/students/abc"),
        (reqwest::Method::GET, "/students/%FF"),
        (reqwest::Method::PUT, "/students/%FF"),
        (reqwest::Method::DELETE, "/students/%FF"),
    ] {
        let res = client.request(method.clone(), server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{method} {path}");
        assert_eq!(content_type(&res).as_deref(), Some("application/json"));
        assert_eq!(res.json::<Value>().await.unwrap(), json!({"error": "invalid id"}));
    }

    let res = client.get(server.url("/students/99")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await.unwrap(), json!({"error": "Student not found"}));

    let res = client
        .put(server.url("/students/99"))
        .json(&json!({"name": "Nobody"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_is_partial_and_tolerates_bad_bodies() {
    let server = spawn_seeded::<Student>().await;
    let client = reqwest::Client::new();

    let res = client
        .put(server.url("/students/1"))
        .json(&json!({"email": "alice@new.example", "name": ""}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(
        updated,
        json!({"id": 1, "name": "Alice Smith", "email": "alice@new.example", "phone": "555-0101", "roomId": null})
    );

    let res = client.put(server.url("/students/1")).body("garbage").send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await.unwrap(), updated);
}

#[tokio::test]
async fn student_delete_is_hard() {
    let server = spawn_seeded::<Student>().await;
    let client = reqwest::Client::new();

    let res = client.delete(server.url("/students/2")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await.unwrap()["name"], "Bob Jones");

    let res = client.get(server.url("/students/2")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.delete(server.url("/students/2")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let created: Value = client
        .post(server.url("/students"))
        .json(&json!({"name": "Erin", "email": "e@x.com"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["id"], 3);
}

#[tokio::test]
async fn rooms_filter_on_availability() {
    let server = spawn_seeded::<Room>().await;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/rooms?available=false")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await.unwrap(), json!([]));

    let all: Vec<Value> = client.get(server.url("/rooms")).send().await.unwrap().json().await.unwrap();
    let numbers: Vec<_> = all.iter().map(|r| r["number"].as_str().unwrap().to_string()).collect();
    assert_eq!(numbers, ["101", "102", "201"]);

    let res = client
        .put(server.url("/rooms/2"))
        .json(&json!({"available": false}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.json::<Value>().await.unwrap()["available"], false);

    let taken: Vec<Value> = client
        .get(server.url("/rooms?available=no"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(taken.len(), 1);
    assert_eq!(taken[0]["number"], "102");

    let free: Vec<Value> = client
        .get(server.url("/rooms?available=true"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(free.len(), 2);
}

#[tokio::test]
async fn booking_lifecycle_ends_cancelled_not_removed() {
    let server = spawn_seeded::<Booking>().await;
    let client = reqwest::Client::new();

    assert_eq!(
        client.get(server.url("/bookings")).send().await.unwrap().json::<Value>().await.unwrap(),
        json!([])
    );

    let res = client
        .post(server.url("/bookings"))
        .json(&json!({"studentId": 1, "roomId": 2, "checkIn": "2025-09-01", "checkOut": "2026-06-30"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["id"], 1);
    assert_eq!(created["status"], "active");
    assert!(created["createdAt"].as_str().unwrap().ends_with('Z'));

    let res = client
        .post(server.url("/bookings"))
        .json(&json!({"studentId": 0, "roomId": 2, "checkIn": "2025-09-01", "checkOut": "2026-06-30"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        res.json::<Value>().await.unwrap()["error"],
        "studentId, roomId, checkIn and checkOut are required"
    );

    let res = client.delete(server.url("/bookings/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let cancelled: Value = res.json().await.unwrap();
    assert_eq!(cancelled["status"], "cancelled");
    assert_eq!(cancelled["createdAt"], created["createdAt"]);

    let all: Vec<Value> = client.get(server.url("/bookings")).send().await.unwrap().json().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["status"], "cancelled");

    let fetched: Value = client.get(server.url("/bookings/1")).send().await.unwrap().json().await.unwrap();
    assert_eq!(fetched["status"], "cancelled");
}

#[tokio::test]
async fn concurrent_creates_receive_unique_ids() {
    const N: usize = 25;
    let store = Arc::new(ResourceStore::<Booking>::empty());
    let server = TestServer::spawn(resource_app(Arc::clone(&store), DEFAULT_MAX_BODY_BYTES)).await;
    let client = reqwest::Client::new();

    let requests = (0..N).map(|i| {
        let client = client.clone();
        let url = server.url("/bookings");
        tokio::spawn(async move {
            let res = client
                .post(url)
                .json(&json!({"studentId": i + 1, "roomId": 1, "checkIn": "2025-09-01", "checkOut": "2026-06-30"}))
                .send()
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::CREATED);
            res.json::<Value>().await.unwrap()["id"].as_i64().unwrap()
        })
    });
    let mut ids = Vec::with_capacity(N);
    for handle in requests.collect::<Vec<_>>() {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), N);

    let all: Vec<Value> = client.get(server.url("/bookings")).send().await.unwrap().json().await.unwrap();
    assert_eq!(all.len(), N);
    assert_eq!(store.len(), N);
}

#[tokio::test]
async fn unknown_routes_get_json_404() {
    let server = spawn_seeded::<Room>().await;
    let res = reqwest::get(server.url("/students")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await.unwrap(), json!({"error": "Route not found"}));
}

#[tokio::test]
async fn unsupported_methods_get_json_405() {
    let server = spawn_seeded::<Student>().await;
    let client = reqwest::Client::new();

    for (method, path) in [
        (reqwest::Method::PATCH, "/students/1"),
        (reqwest::Method::DELETE, "/students"),
        (reqwest::Method::POST, "/health"),
    ] {
        let res = client.request(method.clone(), server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED, "{method} {path}");
        assert_eq!(content_type(&res).as_deref(), Some("application/json"));
        assert_eq!(res.json::<Value>().await.unwrap(), json!({"error": "Method not allowed"}));
    }

    let all: Vec<Value> = client.get(server.url("/students")).send().await.unwrap().json().await.unwrap();
    assert_eq!(all.len(), 2);
}
