use thiserror::Error;

use crate::model::profile::GeneticProfileKind;

pub type Result<T> = std::result::Result<T, AlterationError>;

#[derive(Debug, Error)]
pub enum AlterationError {
    #[error("malformed profile data: {0}")]
    MalformedProfileData(String),

    #[error("malformed {kind} value: {value:?}")]
    MalformedValue {
        kind: GeneticProfileKind,
        value: String,
    },

    #[error("no cases available to summarize")]
    NoCases,

    #[error("failed to retrieve {kind} profile: {message}")]
    Retrieval {
        kind: GeneticProfileKind,
        message: String,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AlterationError {
    pub fn retrieval(kind: GeneticProfileKind, message: impl Into<String>) -> Self {
        AlterationError::Retrieval {
            kind,
            message: message.into(),
        }
    }
}
