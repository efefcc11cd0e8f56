// Single source of truth for all default values.

// --- Server ---
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const PRODUCTION_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_PRODUCTION: bool = false;

// --- Model ---
pub const DEFAULT_MODEL_PATH: &str = "movie_revenue_predictor.onnx";
pub const DEFAULT_INTRA_THREADS: usize = 1;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;

// --- Files & environment ---
pub const DEFAULT_CONFIG_FILENAME: &str = "boxoffice.toml";
pub const ENV_CONFIG_PATH: &str = "BOXOFFICE_CONFIG";
pub const ENV_PORT: &str = "PORT";
pub const ENV_HOST: &str = "BOXOFFICE_HOST";
pub const ENV_MODE: &str = "BOXOFFICE_ENV";
pub const ENV_MODEL_PATH: &str = "BOXOFFICE_MODEL_PATH";
pub const ENV_MODEL_MANIFEST: &str = "BOXOFFICE_MODEL_MANIFEST";
pub const ENV_LOG_JSON: &str = "BOXOFFICE_LOG_JSON";
