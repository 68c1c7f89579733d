#![allow(dead_code)]

use simple_cors::CorsResponse;

pub fn header_value<'a>(response: &'a CorsResponse, name: &str) -> Option<&'a str> {
    response.header(name)
}

pub fn has_header(response: &CorsResponse, name: &str) -> bool {
    header_value(response, name).is_some()
}

pub fn header_names(response: &CorsResponse) -> Vec<&str> {
    response.headers.keys().map(String::as_str).collect()
}
