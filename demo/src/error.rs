use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid number for {0}: '{1}'")]
    InvalidNumber(&'static str, String),
    #[error("{0} expects {1} value(s), got {2}")]
    WrongValueCount(&'static str, usize, usize),
    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Rotation failed: {0}")]
    Rotation(#[from] hamilton::Error),
}
