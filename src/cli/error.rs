use std::result;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Prompt(#[from] promptly::ReadlineError),
}

pub type Result<T> = result::Result<T, Error>;
