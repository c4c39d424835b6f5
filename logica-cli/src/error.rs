use std::fmt;

use logica_util::WireError;

#[derive(Debug)]
pub enum CliError {
    Io(std::io::Error),
    Source(WireError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(err) => write!(f, "{err}"),
            CliError::Source(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<WireError> for CliError {
    fn from(err: WireError) -> Self {
        CliError::Source(err)
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
