use std::fmt;

#[derive(Debug)]
pub enum Error {
    Http(reqwest::Error),
    Status(u16),
    Xml(quick_xml::de::DeError),
    Url(url::ParseError),
    InvalidAddress(String),
    CommandRejected(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

impl From<quick_xml::de::DeError> for Error {
    fn from(err: quick_xml::de::DeError) -> Self {
        Self::Xml(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Url(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(err) => write!(f, "http error: {err}"),
            Self::Status(code) => write!(f, "unexpected status code {code}"),
            Self::Xml(err) => write!(f, "xml error: {err}"),
            Self::Url(err) => write!(f, "url error: {err}"),
            Self::InvalidAddress(address) => write!(f, "invalid gateway address {address}"),
            Self::CommandRejected(command) => write!(f, "gateway rejected command {command}"),
        }
    }
}

impl std::error::Error for Error {}
