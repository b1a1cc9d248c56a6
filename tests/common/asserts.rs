#![allow(dead_code)]

use helius_rpc_proxy::constants::header;
use hyper::body::Bytes;
use hyper::http::{Response, StatusCode};

use super::headers::{has_header, header_value};

pub fn assert_preflight(response: &Response<Bytes>) {
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.body().is_empty(), "preflight body should be empty");
    assert_eq!(
        header_value(response, header::ACCESS_CONTROL_ALLOW_METHODS),
        Some("GET, HEAD, POST, PUT, OPTIONS"),
    );
    assert_eq!(
        header_value(response, header::ACCESS_CONTROL_ALLOW_HEADERS),
        Some("*"),
    );
}

pub fn assert_forbidden(response: &Response<Bytes>) {
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(response.body().as_ref(), b"Forbidden");
    assert!(
        !has_header(response, header::ACCESS_CONTROL_ALLOW_ORIGIN),
        "rejected responses carry no allow-origin header",
    );
}
