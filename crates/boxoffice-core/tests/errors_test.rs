use boxoffice_core::errors::*;

#[test]
fn model_unavailable_is_a_server_error() {
    let err = PredictionError::ModelUnavailable;
    assert!(!err.is_client_error());
    assert_eq!(err.error_code(), "MODEL_UNAVAILABLE");
    assert!(err.to_string().contains("not loaded"));
}

#[test]
fn invalid_input_carries_cause() {
    let err = PredictionError::invalid_input("could not convert `budget`");
    assert!(err.is_client_error());
    assert_eq!(err.error_code(), "INVALID_INPUT");
    assert!(err.to_string().contains("could not convert `budget`"));
}

#[test]
fn model_errors_become_invalid_input() {
    let err: PredictionError = ModelError::UnknownCategory {
        column: "genres".into(),
        value: "Mockumentary".into(),
    }
    .into();
    match err {
        PredictionError::InvalidInput { cause } => {
            assert!(cause.contains("Mockumentary"));
            assert!(cause.contains("genres"));
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn schema_mismatch_lists_both_sides() {
    let err = ModelError::SchemaMismatch {
        expected: "year, genre".into(),
        actual: "year, genres".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("year, genre]"));
    assert!(msg.contains("year, genres]"));
}

#[test]
fn umbrella_error_keeps_inner_codes() {
    let err: BoxofficeError = ConfigError::FileNotFound {
        path: "boxoffice.toml".into(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert!(err.coded_string().starts_with("[CONFIG_ERROR]"));

    let err: BoxofficeError = PredictionError::ModelUnavailable.into();
    assert_eq!(err.error_code(), "MODEL_UNAVAILABLE");
}
