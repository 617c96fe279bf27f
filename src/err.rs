/// Combined error type for startup and serving errors in the time service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("invalid bind address: {0}")]
    InvalidAddress(#[from] std::net::AddrParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
