//! # boxoffice-server
//!
//! axum transport for the prediction adapter.
//!
//! | Route | Behavior |
//! |-------|----------|
//! | `GET /` | Landing page with the prediction form |
//! | `POST /predict` | JSON attributes in, formatted forecast out |
//! | `GET /health` | Model availability and service version |

pub mod app;
pub mod error;
pub mod routes;

pub use app::{build_router, serve, AppState};
pub use error::ApiError;
