use crate::validate::ValidateError;
use thiserror::Error as ThisError;

///
/// Error
///
/// Load-time failure surfaced to callers. Querying never fails; every
/// error in this crate originates while turning fixture data into
/// typed, validated entities.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum Error {
    /// Source text is not well-formed JSON or a required field is absent.
    #[error("failed to decode {source_name}: {source}")]
    Decode {
        source_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Validate(#[from] ValidateError),
}

impl Error {
    pub(crate) const fn decode(source_name: &'static str, source: serde_json::Error) -> Self {
        Self::Decode {
            source_name,
            source,
        }
    }

    /// Validation issues keyed by rendered path, when this is a rejected load.
    #[must_use]
    pub const fn issues(&self) -> Option<&std::collections::BTreeMap<String, Vec<String>>> {
        match self {
            Self::Validate(ValidateError::ValidationFailed(issues)) => Some(issues),
            Self::Decode { .. } => None,
        }
    }
}
