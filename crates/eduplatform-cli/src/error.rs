use eduplatform_config::ConfigError;
use eduplatform_core::Error as CoreError;
use eduplatform_fixtures::FixtureError;
use thiserror::Error as ThisError;

///
/// CliError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Data(#[from] FixtureError),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Load(#[from] CoreError),

    #[error("no {kind} with id {id}")]
    NotFound { kind: &'static str, id: u32 },

    #[error("cannot resolve working directory: {0}")]
    WorkingDir(#[source] std::io::Error),
}

impl CliError {
    /// Validation issues behind this error, if the data was rejected.
    pub fn issues(&self) -> Option<&std::collections::BTreeMap<String, Vec<String>>> {
        match self {
            Self::Load(err) | Self::Data(FixtureError::Load(err)) => err.issues(),
            _ => None,
        }
    }
}
