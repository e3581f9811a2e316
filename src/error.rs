use std::{fmt, io};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiffError>;

#[derive(Debug, Error)]
pub enum DiffError {
    /// The `fmt::Write` sink handed to a renderer failed.
    #[error("failed to format diff output")]
    Fmt(#[from] fmt::Error),
    /// The `io::Write` sink handed to a renderer failed.
    #[error("failed to write diff output: {0}")]
    Io(#[from] io::Error),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
