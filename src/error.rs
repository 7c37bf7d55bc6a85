use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server sent non-UTF-8 data: {0}")]
    InvalidText(#[from] std::str::Utf8Error),
}
