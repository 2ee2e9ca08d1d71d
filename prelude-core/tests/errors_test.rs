use prelude_core::errors::*;

#[test]
fn status_error_carries_status_and_body() {
    let err = TransportError::Status {
        status: 403,
        body: "forbidden".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("403"));
    assert!(msg.contains("forbidden"));
    assert_eq!(err.status(), Some(403));
}

#[test]
fn only_network_and_server_errors_are_transient() {
    assert!(TransportError::Network {
        reason: "reset".into()
    }
    .is_transient());
    assert!(TransportError::Status {
        status: 503,
        body: String::new()
    }
    .is_transient());
    assert!(!TransportError::Status {
        status: 404,
        body: String::new()
    }
    .is_transient());
    assert!(!TransportError::Decode {
        reason: "eof".into()
    }
    .is_transient());
}

#[test]
fn retries_exhausted_keeps_the_last_error() {
    let err = TransportError::RetriesExhausted {
        attempts: 4,
        last: Box::new(TransportError::Status {
            status: 502,
            body: "bad gateway".into(),
        }),
    };
    let msg = err.to_string();
    assert!(msg.contains('4'));
    assert!(msg.contains("HTTP 502"));
    assert_eq!(err.status(), Some(502));
    assert!(!err.is_transient());

    let source = std::error::Error::source(&err).expect("last error is the source");
    assert!(source.to_string().contains("bad gateway"));
}

#[test]
fn invalid_request_is_not_transient() {
    let err = TransportError::InvalidRequest {
        reason: "builder error".into(),
    };
    assert!(!err.is_transient());
    assert_eq!(err.status(), None);
    assert!(err.to_string().contains("builder error"));
}

// --- From impls ---

#[test]
fn transport_error_converts_to_prelude_error() {
    let err: PreludeError = TransportError::Network {
        reason: "dns".into(),
    }
    .into();
    assert!(matches!(err, PreludeError::Transport(_)));
    assert!(err.to_string().contains("dns"));
}

#[test]
fn config_error_converts_to_prelude_error() {
    let err: PreludeError = ConfigError::MissingCredentials.into();
    assert!(matches!(err, PreludeError::Config(_)));
}

#[test]
fn serde_error_converts_to_prelude_error() {
    let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
    let err: PreludeError = json_err.into();
    assert!(matches!(err, PreludeError::Serialization(_)));
}
