//! # boxoffice-inference
//!
//! Loads the pre-trained revenue model from disk and runs it through ONNX
//! Runtime. The model file is opaque; a JSON manifest beside it records the
//! trained column order and the genre vocabulary used to one-hot encode the
//! categorical column.

pub mod encoder;
pub mod loader;
pub mod manifest;
pub mod onnx_model;

pub use encoder::FeatureEncoder;
pub use loader::load_model;
pub use manifest::ModelManifest;
pub use onnx_model::OnnxRevenueModel;
