pub mod feature_row;
pub mod feature_value;
pub mod forecast;
pub mod prediction_request;
pub mod prediction_result;

pub use feature_row::FeatureRow;
pub use feature_value::FeatureValue;
pub use forecast::Forecast;
pub use prediction_request::PredictionRequest;
pub use prediction_result::{PredictionResult, ProfitStatus};
