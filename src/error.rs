//! @ai:module:intent Define error types for the heurbench core
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for all heurbench operations
///
/// Malformed data lines are not errors at this level: the parser drops them
/// per line and keeps going. Only conditions that end the whole invocation
/// surface here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read results file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No valid records parsed from input ({dropped} data lines dropped)")]
    NoValidRecords { dropped: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
