use crate::ApiError;

use lb_auth::AuthError;
use lb_store::StoreError;

use std::panic::Location;

use axum::{http::StatusCode, response::IntoResponse};
use error_location::ErrorLocation;
use googletest::prelude::*;
use http_body_util::BodyExt;

async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = render(ApiError::NotFound {
        message: "No vehicle with id x found".into(),
        location: ErrorLocation::from(Location::caller()),
    })
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "No vehicle with id x found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = render(ApiError::Validation {
        message: "name is required".into(),
        field: Some("name".into()),
        location: ErrorLocation::from(Location::caller()),
    })
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_persistence_error_returns_500_without_path() {
    let error: ApiError = StoreError::Io {
        operation: "write",
        path: "/srv/secret/vehicles.json".into(),
        source: std::io::Error::other("disk full"),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "PERSISTENCE_ERROR");
    let message = json["error"]["message"].as_str().unwrap();
    assert_that!(message, not(contains_substring("/srv/secret")));
}

#[tokio::test]
async fn test_unauthenticated_variants_all_return_401() {
    let errors = vec![
        AuthError::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        },
        AuthError::CredentialExpired {
            location: ErrorLocation::from(Location::caller()),
        },
        AuthError::InvalidCredential {
            message: "InvalidSignature".into(),
            location: ErrorLocation::from(Location::caller()),
        },
    ];

    for error in errors {
        let (status, json) = render(error.into()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"]["code"], "NOT_AUTHENTICATED");
    }
}

#[tokio::test]
async fn test_auth_exchange_returns_401_with_own_code() {
    let (status, json) = render(AuthError::exchange("token endpoint returned 400").into()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "AUTH_EXCHANGE_FAILED");
}

#[tokio::test]
async fn test_store_forbidden_returns_403() {
    let error: ApiError = StoreError::Forbidden {
        identity: "B".into(),
        kind: "vehicle",
        source: AuthError::Forbidden {
            identity: "B".into(),
            location: ErrorLocation::from(Location::caller()),
        },
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_store_validation_keeps_field() {
    let error: ApiError = StoreError::Validation {
        message: "miles is required".into(),
        field: Some("miles".into()),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "miles");
}

#[test]
fn test_configuration_error_converts_to_internal() {
    let error: ApiError = AuthError::configuration("bad token url").into();

    assert!(matches!(error, ApiError::Internal { .. }));
}
