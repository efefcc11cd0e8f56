//! Availability of the revenue model for the lifetime of the process.

use std::sync::Arc;

use boxoffice_core::errors::ModelError;
use boxoffice_core::traits::IRevenueModel;

/// Shared read-only handle to a loaded model.
pub type ModelHandle = Arc<dyn IRevenueModel>;

/// Either a loaded model or the reason it could not be loaded.
#[derive(Clone)]
pub enum ModelState {
    Ready(ModelHandle),
    Unavailable { reason: String },
}

impl ModelState {
    pub fn ready<M: IRevenueModel + 'static>(model: M) -> Self {
        ModelState::Ready(Arc::new(model))
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        ModelState::Unavailable {
            reason: reason.into(),
        }
    }

    /// Convert a startup load result. A load failure disables prediction but
    /// is not fatal.
    pub fn from_load<M: IRevenueModel + 'static>(result: Result<M, ModelError>) -> Self {
        match result {
            Ok(model) => Self::ready(model),
            Err(e) => Self::unavailable(e.to_string()),
        }
    }

    pub fn model(&self) -> Option<&ModelHandle> {
        match self {
            ModelState::Ready(model) => Some(model),
            ModelState::Unavailable { .. } => None,
        }
    }
}

impl std::fmt::Debug for ModelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelState::Ready(model) => f.debug_tuple("Ready").field(&model.name()).finish(),
            ModelState::Unavailable { reason } => f
                .debug_struct("Unavailable")
                .field("reason", reason)
                .finish(),
        }
    }
}
