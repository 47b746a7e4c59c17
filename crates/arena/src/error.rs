//! Arena errors

use thiserror::Error;
use ttt_core::Player;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ArenaError {
    #[error("unknown player kind '{0}' (expected human, easy, medium, hard or master)")]
    UnknownPlayerKind(String),

    #[error("player {0} is human; automated play needs an automated player")]
    HumanSeat(Player),

    #[error("the current game is still in progress")]
    GameInProgress,

    #[error(transparent)]
    Rules(#[from] ttt_core::Error),

    #[error("invalid tier configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to serialize tier configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("failed to {operation} '{path}': {source}")]
    Io {
        operation: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
