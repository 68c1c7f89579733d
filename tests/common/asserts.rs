use simple_cors::constants::header;
use simple_cors::{CorsResponse, Flow};

/// Asserts an accepted preflight: the caller is stopped and no rejection status is set.
pub fn assert_preflight_accepted((flow, response): (Flow, CorsResponse)) -> CorsResponse {
    assert_eq!(flow, Flow::Stop, "preflight must always stop the caller");
    assert_eq!(response.status, None, "accepted preflight should keep the default status");
    assert!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_some(),
        "accepted preflight should carry Access-Control-Allow-Origin"
    );
    response
}

/// Asserts a rejection with `status` and no CORS headers.
pub fn assert_rejected((flow, response): (Flow, CorsResponse), status: u16) -> CorsResponse {
    assert_eq!(flow, Flow::Stop);
    assert_eq!(response.status, Some(status));
    assert!(
        response.headers.is_empty(),
        "rejections must not emit CORS headers, got {:?}",
        response.headers
    );
    response
}
