use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Claims},
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use jsonwebtoken::{encode, EncodingKey, Header};

mod require;

const SECRET: &str = "test-secret";

/// Signs a token for `sub` expiring `ttl_secs` from now (negative for expired).
fn token(secret: &str, sub: &str, ttl_secs: i64) -> String {
    let exp = (chrono::Utc::now().timestamp() + ttl_secs) as usize;

    encode(
        &Header::default(),
        &Claims {
            sub: sub.to_string(),
            exp,
        },
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    );
    headers
}
