use std::error::Error;
use std::fmt::{self, Display};
use std::io;
use std::string::FromUtf8Error;

pub type ExtractResult<T> = Result<T, Box<ExtractError>>;

/// A fatal extraction error, pretty-printed with `Display`
///
/// The fatal error surface is small: reading the input and decoding it as
/// UTF-8. Everything after that either succeeds or is reported as a
/// recoverable warning through the [`Logger`](crate::Logger).
#[derive(Debug)]
pub struct ExtractError {
    kind: ExtractErrorKind,
}

#[derive(Debug)]
enum ExtractErrorKind {
    Io(io::Error),
    FromUtf8(String),
}

impl Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExtractErrorKind::Io(err) => write!(f, "Error: {}", err),
            ExtractErrorKind::FromUtf8(message) => write!(f, "Error: {}", message),
        }
    }
}

impl From<io::Error> for Box<ExtractError> {
    fn from(error: io::Error) -> Self {
        Box::new(ExtractError {
            kind: ExtractErrorKind::Io(error),
        })
    }
}

impl From<FromUtf8Error> for Box<ExtractError> {
    fn from(error: FromUtf8Error) -> Self {
        Box::new(ExtractError {
            kind: ExtractErrorKind::FromUtf8(format!(
                "Invalid UTF-8 character \"\\x{:X?}\"",
                error.as_bytes()[0]
            )),
        })
    }
}

impl Error for ExtractError {
    fn description(&self) -> &'static str {
        "CSS extraction error"
    }
}
