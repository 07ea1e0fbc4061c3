//! Error type for sim construction.

use npc_core::{NpcError, ObjectId};

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// An agent was registered with a body that doesn't exist in the world.
    #[error("agent body {0:?} does not exist in the world")]
    MissingBody(ObjectId),

    /// An agent was registered against a player that doesn't exist.
    #[error("player object {0:?} does not exist in the world")]
    MissingPlayer(ObjectId),

    /// A behavior configuration failed validation.
    #[error(transparent)]
    Npc(#[from] NpcError),
}

pub type SimResult<T> = Result<T, SimError>;
