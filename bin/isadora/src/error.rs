use std::fmt;

#[derive(Debug)]
pub enum Error {
    Isy(isy::Error),
    MissingEnv(&'static str),
    InvalidEnv(&'static str, String),
    UnknownNode(String),
}

impl From<isy::Error> for Error {
    fn from(err: isy::Error) -> Self {
        Self::Isy(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Isy(err) => write!(f, "isy error: {err}"),
            Self::MissingEnv(name) => write!(f, "set ENV variable {name}"),
            Self::InvalidEnv(name, value) => write!(f, "invalid value {value:?} of {name}"),
            Self::UnknownNode(node_id) => write!(f, "unknown node {node_id}"),
        }
    }
}

impl std::error::Error for Error {}
