//! Error types of palette lookups and imports.

use thiserror::Error;
use crate::PaletteId;

/// Result type for registry and import operations.
pub type PaletteResult<T> = Result<T, PaletteError>;

/// Errors of registry lookups, registrations and file imports.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// No palette is registered under this id.
    #[error("no palette with id {0}")]
    NotFound(PaletteId),

    /// The name matches no palette (machine name, alias or human name).
    #[error("unknown palette name: {0:?}")]
    UnknownName(String),

    /// All user palette ids have been assigned.
    #[error("palette registry full (last id {0})")]
    RegistryFull(PaletteId),

    /// Malformed XML palette file.
    #[error("XML error: {0}")]
    Xml(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(PaletteError::NotFound(PaletteId(70_000)).to_string(),
                   "no palette with id 70000");
        assert_eq!(PaletteError::UnknownName("foo".into()).to_string(),
                   "unknown palette name: \"foo\"");
        let e: PaletteError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(e, PaletteError::Io(_)));
    }
}
