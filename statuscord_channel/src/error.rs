use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Discord answered the voice status request with a non-success code
    #[error("Discord answered with status code {0}")]
    UnexpectedStatus(u16),

    #[error(transparent)]
    Serenity(#[from] serenity::Error),

    #[error(transparent)]
    Rest(#[from] reqwest::Error),
}

pub type Result<T> = ::core::result::Result<T, Error>;
