use super::*;

/// Tests that a valid token is accepted.
///
/// Expected: Ok(Claims) with the token subject
#[test]
fn accepts_valid_token() {
    let headers = bearer(&token(SECRET, "alice", 3600));

    let claims = AuthGuard::new(SECRET, &headers).require().unwrap();

    assert_eq!(claims.sub, "alice");
}

/// Tests that a request without Authorization header is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_missing_header() {
    let headers = HeaderMap::new();

    let result = AuthGuard::new(SECRET, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests that a non-bearer scheme is treated as missing.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_non_bearer_scheme() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(SECRET, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests that a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_wrong_signature() {
    let headers = bearer(&token("other-secret", "alice", 3600));

    let result = AuthGuard::new(SECRET, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

/// Tests that an expired token is rejected.
///
/// Expires well beyond the default validation leeway.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_expired_token() {
    let headers = bearer(&token(SECRET, "alice", -3600));

    let result = AuthGuard::new(SECRET, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

/// Tests that garbage in the bearer slot is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_malformed_token() {
    let headers = bearer("not.a.jwt");

    let result = AuthGuard::new(SECRET, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}
