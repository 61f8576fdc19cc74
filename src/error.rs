#![warn(missing_docs)]
//! Marmot specific error structures
use std::{error::Error, fmt::Display};

/// Marmot application specific Result type
pub type MarmResult<T> = std::result::Result<T, MarmotError>;

/// Errors that can be returned by various MARMOT functions.
#[derive(Debug, PartialEq, Eq)]
pub enum MarmotError {
    /// a mirror state was set to an unrecognized value
    InvalidState(String),
    /// a geometric dimension (width, height, thickness, radius, angle) violates its constraints
    InvalidDimension(String),
    /// errors while assembling or querying a component's face registry
    Component(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for MarmotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidState(m) => {
                write!(f, "InvalidState:{m}")
            }
            Self::InvalidDimension(m) => {
                write!(f, "InvalidDimension:{m}")
            }
            Self::Component(m) => {
                write!(f, "Component:{m}")
            }
            Self::Other(m) => write!(f, "Marmot Error:Other:{m}"),
        }
    }
}
impl Error for MarmotError {}

impl std::convert::From<String> for MarmotError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn from() {
        let error = MarmotError::from("test".to_string());
        assert_eq!(error, MarmotError::Other("test".to_string()));
    }
    #[test]
    fn display() {
        assert_eq!(
            format!("{}", MarmotError::InvalidState("test".to_string())),
            "InvalidState:test"
        );
        assert_eq!(
            format!("{}", MarmotError::InvalidDimension("test".to_string())),
            "InvalidDimension:test"
        );
        assert_eq!(
            format!("{}", MarmotError::Component("test".to_string())),
            "Component:test"
        );
        assert_eq!(
            format!("{}", MarmotError::Other("test".to_string())),
            "Marmot Error:Other:test"
        );
    }
    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", MarmotError::InvalidState("test".to_string())),
            "InvalidState(\"test\")"
        );
    }
}
