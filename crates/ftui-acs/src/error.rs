use thiserror::Error;

pub type Result<T> = std::result::Result<T, OverrideError>;

/// Rejected terminal override entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverrideError {
    #[error("terminal override has an empty pattern: {entry:?}")]
    EmptyPattern { entry: String },

    #[error("unknown capability in terminal override: {name:?}")]
    UnknownCapability { name: String },

    #[error("invalid numeric value for {capability}: {value:?}")]
    InvalidNumber {
        capability: &'static str,
        value: String,
    },

    #[error("capability {capability} requires a value")]
    MissingValue { capability: &'static str },
}

impl OverrideError {
    /// Name of the capability involved, when there is one.
    #[must_use]
    pub fn capability(&self) -> Option<&str> {
        match self {
            Self::EmptyPattern { .. } => None,
            Self::UnknownCapability { name } => Some(name),
            Self::InvalidNumber { capability, .. } | Self::MissingValue { capability } => {
                Some(capability)
            }
        }
    }
}
