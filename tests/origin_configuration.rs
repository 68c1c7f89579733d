mod common;

use simple_cors::constants::{header, method, status};
use simple_cors::{AllowedOrigins, Cors, CorsPolicy, RequestContext};
use common::asserts::{assert_preflight_accepted, assert_rejected};
use common::builders::{cors, preflight_request};
use common::headers::header_value;

fn preflight_from(origin: &str) -> RequestContext<'_> {
    RequestContext {
        method: method::OPTIONS,
        url: "https://api.example/resource",
        origin: Some(origin),
        access_control_request_method: Some(method::GET),
        access_control_request_headers: None,
    }
}

mod exact_list {
    use super::*;

    #[test]
    fn should_allow_listed_origin_when_exact_match_then_echo_it() {
        let cors = cors()
            .origins("https://a.example, https://b.example")
            .methods("*")
            .build();

        let response = assert_preflight_accepted(
            preflight_request()
                .origin("https://b.example")
                .request_method(method::GET)
                .handle(&cors),
        );

        assert_eq!(
            header_value(&response, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://b.example")
        );
    }

    #[test]
    fn should_reject_unlisted_origin_when_exact_list_then_omit_allow_origin() {
        let cors = cors().origins("https://a.example").methods("*").build();

        let response = assert_rejected(
            preflight_request()
                .origin("https://b.example")
                .request_method(method::GET)
                .handle(&cors),
            status::FORBIDDEN,
        );

        assert_eq!(
            header_value(&response, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            None
        );
    }

    #[test]
    fn should_compare_case_sensitively_when_origin_case_differs_then_reject() {
        let cors = cors().origins("https://App.example").methods("*").build();

        assert_rejected(
            preflight_request()
                .origin("https://app.example")
                .request_method(method::GET)
                .handle(&cors),
            status::FORBIDDEN,
        );
    }

    #[test]
    fn should_not_match_prefixes_when_origin_has_port_or_path_then_reject() {
        let cors = cors().origins("https://a.example").methods("*").build();

        for origin in ["https://a.example:8443", "https://a.example.evil", "http://a.example"] {
            assert_rejected(
                preflight_request()
                    .origin(origin)
                    .request_method(method::GET)
                    .handle(&cors),
                status::FORBIDDEN,
            );
        }
    }

    #[test]
    fn should_deny_every_cross_origin_when_no_origins_configured_then_reject() {
        let cors = cors().methods("*").build();

        assert_rejected(
            preflight_request()
                .origin("https://a.example")
                .request_method(method::GET)
                .handle(&cors),
            status::FORBIDDEN,
        );
    }
}

mod wildcard {
    use super::*;

    #[test]
    fn should_echo_literal_origin_when_wildcard_then_never_emit_star() {
        let cors = cors().origins("*").methods("*").credentials(true).build();

        let response = assert_preflight_accepted(
            preflight_request()
                .origin("https://anything.example")
                .request_method(method::GET)
                .handle(&cors),
        );

        assert_eq!(
            header_value(&response, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://anything.example")
        );
    }

    #[test]
    fn should_collapse_mixed_list_when_star_present_then_allow_unlisted_origin() {
        let cors = cors()
            .origins("https://a.example, *")
            .methods("*")
            .build();

        assert_eq!(cors.policy().allowed_origins, AllowedOrigins::Any);
        assert!(cors.is_request_allowed(&preflight_from("https://z.example")));
    }
}

mod is_request_allowed {
    use super::*;

    #[test]
    fn should_gate_on_origin_only_when_called_directly_then_ignore_method_policy() {
        let cors = Cors::new(CorsPolicy {
            allowed_origins: AllowedOrigins::list(["https://a.example"]),
            ..CorsPolicy::default()
        });

        assert!(cors.is_request_allowed(&preflight_from("https://a.example")));
        assert!(!cors.is_request_allowed(&preflight_from("https://b.example")));
    }

    #[test]
    fn should_allow_same_host_when_origin_unlisted_then_skip_gate() {
        let cors = Cors::new(CorsPolicy::default());

        assert!(cors.is_request_allowed(&preflight_from("https://api.example")));
    }
}
