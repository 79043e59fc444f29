use std::{error, fmt};

use druid::Data;

#[derive(Clone, Debug, Data)]
pub enum Error {
    StoreError(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::StoreError(err) => f.write_str(err),
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        match err {
            // The store's error body is not worth surfacing, show a fixed
            // message for any unsuccessful status.
            ureq::Error::StatusCode(_) => Self::StoreError("Something went wrong!".to_string()),
            other => Self::StoreError(other.to_string()),
        }
    }
}
