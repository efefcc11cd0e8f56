//! Configuration system.
//! TOML-based, 3-layer resolution: env > config file > defaults.

pub mod boxoffice_config;
pub mod defaults;
pub mod model_config;
pub mod observability_config;
pub mod server_config;

pub use boxoffice_config::BoxofficeConfig;
pub use model_config::ModelConfig;
pub use observability_config::ObservabilityConfig;
pub use server_config::ServerConfig;
