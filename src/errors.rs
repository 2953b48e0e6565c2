use crate::terrain::TileIndex;
use std::path::PathBuf;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum TerrainError {
    // Config-related errors
    #[error("Failed to get config directory")]
    ConfigDirNotFound,

    #[error("Config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize settings: {0}")]
    SerializationFailed(#[from] toml::ser::Error),

    #[error("Failed to deserialize settings: {0}")]
    DeserializationFailed(#[from] toml::de::Error),

    #[error("Config file not found at path: {path}")]
    ConfigFileNotFound { path: PathBuf },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // Region-related errors
    #[error("Tile {index} is not part of the region")]
    TileNotFound { index: TileIndex },
}

impl From<ValidationErrors> for TerrainError {
    fn from(errors: ValidationErrors) -> Self {
        TerrainError::InvalidConfig {
            reason: describe_validation_errors(&errors),
        }
    }
}

/// Flatten nested validation errors into `path.field: message` pairs.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut details = Vec::new();
    collect_validation_errors("", errors, &mut details);
    details.join("; ")
}

fn collect_validation_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            validator::ValidationErrorsKind::Field(field_errors) => {
                let messages: Vec<String> = field_errors.iter().map(|e| e.to_string()).collect();
                out.push(format!("{path}: {}", messages.join(", ")));
            }
            validator::ValidationErrorsKind::Struct(nested) => {
                collect_validation_errors(&path, nested, out);
            }
            validator::ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_validation_errors(&format!("{path}[{index}]"), nested, out);
                }
            }
        }
    }
}

/// Result type alias for all operations
pub type TerrainResult<T> = Result<T, TerrainError>;
