use thiserror::Error;

#[derive(Error, Debug)]
pub enum RigError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("No part '{id}' in category '{category}'")]
    PartNotFound { category: String, id: String },

    #[error("{category} '{id}' fails the {rule} check against the current build")]
    Incompatible {
        category: String,
        id: String,
        rule: &'static str,
    },

    #[error("Your build is empty! Select some parts first.")]
    EmptyBuild,

    #[error("Catalog loader stopped before delivering a catalog")]
    CatalogUnavailable,
}

pub type RigResult<T> = Result<T, RigError>;
