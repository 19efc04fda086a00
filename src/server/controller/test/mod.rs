use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use sea_orm::EntityTrait;
use serde_json::{json, Value};
use std::path::Path;
use tower::ServiceExt;

use crate::server::{
    middleware::auth::Claims, model::item::ITEM_COLLECTION, router::router, state::AppState,
};
use test_utils::{builder::TestBuilder, context::TestContext, factory};


const SECRET: &str = "controller-secret";

/// Builds a test database and a router serving the item API over it.
async fn app() -> (TestContext, Router) {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let router = router(Some(AppState::new(db, SECRET)), Path::new("dist"));

    (test, router)
}

fn token() -> String {
    let exp = (chrono::Utc::now().timestamp() + 3600) as usize;

    encode(
        &Header::default(),
        &Claims {
            sub: "tester".to_string(),
            exp,
        },
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

/// Builds an authorized request with an optional JSON body.
fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token()));

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
