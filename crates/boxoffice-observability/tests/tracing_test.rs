use boxoffice_core::config::ObservabilityConfig;
use boxoffice_observability::tracing_setup::spans::names;
use boxoffice_observability::{init_tracing, init_tracing_with_filter};

#[test]
fn init_is_idempotent() {
    init_tracing(&ObservabilityConfig::default());
    init_tracing(&ObservabilityConfig {
        log_level: "debug".to_string(),
        json: true,
    });
    init_tracing_with_filter("warn");
    tracing::info!("still logging after repeated init");
}

#[test]
fn span_macros_use_named_spans() {
    let span = boxoffice_observability::prediction_span!("stub");
    let _guard = span.enter();
    let load = boxoffice_observability::model_load_span!("/tmp/model.onnx");
    drop(load);
    assert_eq!(names::PREDICTION, "boxoffice.prediction");
    assert_eq!(names::MODEL_LOAD, "boxoffice.model_load");
}
