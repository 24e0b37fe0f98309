//! Host-side error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// SDL reports failures as plain strings.
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("the `sdl` feature is not enabled; rerun with --headless")]
    NoWindowSupport,
}

pub type Result<T> = std::result::Result<T, Error>;
