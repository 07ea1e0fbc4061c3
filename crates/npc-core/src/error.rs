//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `NpcError` via `From` impls, or keep them separate.  Vanished world
//! objects are deliberately *not* errors — behaviors treat them as a normal
//! abort path and reset; `NpcError` is reserved for genuine misconfiguration.

use thiserror::Error;

use crate::{AgentId, ObjectId};

/// The top-level error type for `npc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum NpcError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("object {0} not found")]
    ObjectNotFound(ObjectId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `npc-*` crates.
pub type NpcResult<T> = Result<T, NpcError>;
