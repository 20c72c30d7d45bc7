use thiserror::Error;

/// This is the error type for the games. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug)]
pub enum GameError {
    #[error("The deck ran out of cards")]
    DeckExhausted,
    #[error("Can't draw after the hand is over")]
    HandFinished,
    #[error("Console failure: {0}")]
    Console(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
