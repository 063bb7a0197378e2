use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing input file argument")]
    MissingInput,
    #[error("Unknown option [{0}]")]
    UnknownOption(String),
    #[error("Unexpected argument [{0}]")]
    UnexpectedArgument(String),
    #[error("Option [{option}] requires a value")]
    MissingValue {
        option: String
    },
    #[error("Option [{option}] expects a positive integer but got [{value}]")]
    InvalidValue {
        option: String,
        value: String
    }
}
