use std::io::Write;
use strum_macros::Display;
use thiserror::Error;

#[derive(Debug, Display)]
pub enum ConfigType {
    #[strum(serialize = "Main config")]
    MAIN,
    #[strum(serialize = "Command line")]
    ARGS,
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("error processing args. Cause : {0}")]
    ArgsProcessingError(String),
    #[error("invalid configuration : {0}")]
    ConfigError(String),
    #[error("unable to read configuration file {file:?}. Cause : {cause}")]
    ConfigReadError { file: String, cause: String },
    #[error("symbol pool \"{0}\" is empty")]
    EmptyPool(String),
    #[error("the gamer template set is empty")]
    EmptyTemplateSet,
    #[error(transparent)]
    Fmt(#[from] ::std::fmt::Error),
    #[error("unable to interpolate path. Cause : {cause}")]
    InterpolationError { location: ConfigType, cause: String },
    #[error("blank symbol at position {index} of pool \"{pool}\"")]
    InvalidSymbol { pool: String, index: usize },
    #[error(transparent)]
    Io(#[from] ::std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(String),
    #[error("unable to parse {location} file {file:?}. Cause : {cause}")]
    SerdeTomlError {
        location: ConfigType,
        file: String,
        cause: String,
    },
    #[error("invalid template {template:?}. Cause : {cause}")]
    TemplateParseError { template: String, cause: String },
    #[error("error rendering output pattern. Cause : {0}")]
    TemplateRenderError(String),
    #[error("unknown category \"{0}\"")]
    UnknownCategory(String),
    #[error("unknown font \"{0}\"")]
    UnknownFont(String),
    #[error("{0}")]
    Msg(String),
}

impl From<&'static str> for Error {
    fn from(s: &'static str) -> Self {
        Error::Msg(s.to_owned())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Msg(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::JsonError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn default_error_handler(error: &Error, output: &mut dyn Write) {
    use nu_ansi_term::Color::Red;

    match error {
        Error::Io(io_error) if io_error.kind() == ::std::io::ErrorKind::BrokenPipe => {
            ::std::process::exit(0);
        }
        Error::ConfigError(_)
        | Error::ConfigReadError { file: _, cause: _ }
        | Error::SerdeTomlError {
            location: _,
            file: _,
            cause: _,
        }
        | Error::InterpolationError {
            location: _,
            cause: _,
        } => {
            writeln!(output, "{}: {}", Red.paint("[config error]"), error).ok();
        }
        Error::EmptyPool(_)
        | Error::EmptyTemplateSet
        | Error::InvalidSymbol { pool: _, index: _ }
        | Error::TemplateParseError {
            template: _,
            cause: _,
        } => {
            writeln!(output, "{}: {}", Red.paint("[style tables error]"), error).ok();
        }
        _ => {
            writeln!(output, "{}: {}", Red.paint("[fancyname error]"), error).ok();
        }
    };
}
