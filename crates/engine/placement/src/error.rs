//! Error types for the placement crate

/// Errors that can occur at the placement boundary
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backend could not build a renderable from the named asset
    #[error("Model load failed for '{model}': {reason}")]
    ModelLoad {
        /// The asset that failed to load
        model: String,
        /// Backend-supplied failure description
        reason: String,
    },
}

/// Result type for placement operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Construct a model-load failure
    pub fn model_load(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::ModelLoad {
            model: model.into(),
            reason: reason.into(),
        }
    }
}
