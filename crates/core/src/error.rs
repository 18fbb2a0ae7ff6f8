//! Error type for metadata lookups.

use thiserror::Error;

/// Error type for metadata operations.
///
/// The constants themselves can never fail to load; only lookups by name can.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MetadataError {
    /// The requested name is not part of the exported metadata.
    #[error(
        "Metadata unavailable: '{name}' is not an exported name (expected one of: {})",
        .expected.join(", ")
    )]
    Unavailable { name: String, expected: &'static [&'static str] },
}

impl MetadataError {
    pub(crate) fn unavailable(name: impl Into<String>, expected: &'static [&'static str]) -> Self {
        Self::Unavailable { name: name.into(), expected }
    }
}

/// Convenience result type for metadata operations.
pub type MetadataResult<T> = Result<T, MetadataError>;
