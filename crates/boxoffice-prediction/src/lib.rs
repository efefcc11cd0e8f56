//! # boxoffice-prediction
//!
//! The prediction adapter. One call maps a raw attribute bundle onto the
//! trained feature schema, invokes the revenue model, derives profit/loss
//! against the budget, and formats the result.
//!
//! The model is passed in explicitly as a [`ModelState`]; nothing here holds
//! process-wide state.

pub mod engine;
pub mod state;

pub use engine::PredictionEngine;
pub use state::ModelState;
