use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Internal,
    Usage,
    TooShort,
    TooLong,
    Io,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    side: Option<usize>,
    expected: Option<usize>,
    actual: Option<usize>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            side: None,
            expected: None,
            actual: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Zero-based ordinal of the sequence that ended early in a strict zip.
    pub fn with_side(mut self, side: usize) -> Self {
        self.side = Some(side);
        self
    }

    pub fn with_expected(mut self, expected: usize) -> Self {
        self.expected = Some(expected);
        self
    }

    pub fn with_actual(mut self, actual: usize) -> Self {
        self.actual = Some(actual);
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn side(&self) -> Option<usize> {
        self.side
    }

    pub fn expected(&self) -> Option<usize> {
        self.expected
    }

    pub fn actual(&self) -> Option<usize> {
        self.actual
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(side) = self.side {
            write!(f, " (side: {side})")?;
        }
        if let Some(expected) = self.expected {
            write!(f, " (expected: {expected})")?;
        }
        if let Some(actual) = self.actual {
            write!(f, " (actual: {actual})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

pub fn to_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Internal => 1,
        ErrorKind::Usage => 2,
        ErrorKind::TooShort => 3,
        ErrorKind::TooLong => 4,
        ErrorKind::Io => 5,
    }
}
