use std::io;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("dial failed: {0}")]
    Dial(#[from] io::Error),
    #[error("dial timed out after {0:?}")]
    Timeout(Duration),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
