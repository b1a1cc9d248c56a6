#![allow(dead_code)]

use hyper::http::Response;

pub fn header_value<'a, B>(response: &'a Response<B>, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
}

pub fn has_header<B>(response: &Response<B>, name: &str) -> bool {
    response.headers().contains_key(name)
}
