use crate::id::ComponentId;
use thiserror::Error;

/// Errors the core can produce. Tree operations addressed at an id that is
/// no longer present are silent no-ops, not errors: with single-turn
/// execution a stale id only ever means the state is already consistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Persisted or foreign data carried a type tag no template matches.
    #[error("unknown component type `{found}`")]
    UnknownComponentType { found: String },

    /// The target of a child insertion is not a live container.
    #[error("no container with id {id}")]
    ContainerNotFound { id: ComponentId },

    /// The saved-document payload could not be read at all.
    #[error("malformed document payload: {0}")]
    MalformedPayload(String),
}
