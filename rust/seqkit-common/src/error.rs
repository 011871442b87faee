use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// An element (or the sequence itself) could not be encoded.
    ///
    /// `message` is the element's own failure message, without any position or
    /// wrapper text added by the encoding library.
    pub fn encode(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::Encode {
                message: message.into(),
            }
            .into(),
        )
    }

    /// The input could not be decoded into a sequence.
    ///
    /// `line` and `column` are one-based; zero means the position is unknown.
    pub fn decode(message: impl Into<String>, line: usize, column: usize) -> Error {
        Error(
            ErrorKind::Decode {
                message: message.into(),
                line,
                column,
            }
            .into(),
        )
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error(
            ErrorKind::Io {
                context: context.into(),
                source,
            }
            .into(),
        )
    }

    /// Returns the unwrapped message of an encode/decode failure, if this is one.
    pub fn message(&self) -> Option<&str> {
        match self.kind() {
            ErrorKind::Encode { message } | ErrorKind::Decode { message, .. } => {
                Some(message.as_str())
            }
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("{message}")]
    Encode { message: String },

    #[error("{message} (line {line}, column {column})")]
    Decode {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("", e)
    }
}
