use thiserror::Error;

/// Errors raised while building or loading a page document
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid section type: {0}")]
    InvalidSectionType(String),

    #[error("Field `{0}` cannot be changed")]
    ImmutableField(String),

    #[error("Section type `{kind}` has no field `{field}`")]
    UnknownField { kind: String, field: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;
