use thiserror::Error;

use crate::collection::CollectionState;

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("cannot {operation} a collection in the {state} state")]
    InvalidTransition {
        operation: &'static str,
        state: CollectionState,
    },

    #[error("scene contains no shapes")]
    EmptyScene,

    #[error("failed to parse TOML scene: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON scene: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShapeError {
    pub fn invalid_transition(operation: &'static str, state: CollectionState) -> Self {
        Self::InvalidTransition { operation, state }
    }
}
