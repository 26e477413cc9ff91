use thiserror::Error;

/// Problems found while turning a source file into a [`PenguinDataset`].
///
/// Loader functions return `anyhow::Result` and attach file context; these
/// variants stay reachable through `anyhow::Error::downcast_ref`.
///
/// [`PenguinDataset`]: crate::data::model::PenguinDataset
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    /// `row` counts data rows from 1, header excluded.
    #[error("row {row}: column '{column}' has invalid value '{value}'")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("dataset contains no rows")]
    EmptyDataset,
}
