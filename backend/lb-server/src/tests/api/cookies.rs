use crate::CookieSettings;

use lb_auth::SessionBinder;
use lb_core::Identity;

use std::time::Duration;

use axum::http::{HeaderMap, HeaderValue, header};
use googletest::prelude::*;

fn settings(secure: bool) -> CookieSettings {
    CookieSettings {
        name: "lb_session".into(),
        secure,
        max_age_secs: 3600,
        landing_url: "/".into(),
    }
}

fn headers(values: &[&str]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for value in values {
        headers.append(header::COOKIE, HeaderValue::from_str(value).unwrap());
    }
    headers
}

#[test]
fn test_session_cookie_attributes() {
    let binder = SessionBinder::with_hs256(b"0123456789abcdef0123456789abcdef", Duration::from_secs(60));
    let credential = binder.issue(&Identity::from("A")).unwrap();

    let cookie = settings(false).session_cookie(&credential);

    assert_that!(cookie, starts_with(format!("lb_session={}", credential.as_str())));
    assert_that!(cookie, contains_substring("HttpOnly"));
    assert_that!(cookie, contains_substring("SameSite=Lax"));
    assert_that!(cookie, contains_substring("Path=/"));
    assert_that!(cookie, contains_substring("Max-Age=3600"));
    assert_that!(cookie, not(contains_substring("Secure")));
}

#[test]
fn test_secure_flag_when_configured() {
    let cookie = settings(true).expired_cookie();

    assert_that!(cookie, ends_with("; Secure"));
}

#[test]
fn test_expired_cookie_clears_value() {
    let cookie = settings(false).expired_cookie();

    assert_that!(cookie, starts_with("lb_session=;"));
    assert_that!(cookie, contains_substring("Max-Age=0"));
}

#[test]
fn test_find_among_other_cookies() {
    let headers = headers(&["theme=dark; lb_session=abc.def.ghi; lang=en"]);

    assert_eq!(settings(false).find(&headers).as_deref(), Some("abc.def.ghi"));
}

#[test]
fn test_find_across_multiple_headers() {
    let headers = headers(&["theme=dark", "lb_session=token"]);

    assert_eq!(settings(false).find(&headers).as_deref(), Some("token"));
}

#[test]
fn test_find_ignores_similar_names_and_empty_values() {
    let cookies = settings(false);

    assert_eq!(cookies.find(&headers(&["lb_session_old=token"])), None);
    assert_eq!(cookies.find(&headers(&["lb_session="])), None);
    assert_eq!(cookies.find(&HeaderMap::new()), None);
}
