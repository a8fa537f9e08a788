use std::path::Path;

use crate::contributor::{validate_contributors, Contributor};
use crate::error::AppError;

/// Read and validate the contributor list.
///
/// # Errors
///
/// Fails when the file cannot be read, is not a JSON array of
/// contributors, or repeats an id.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub async fn load_contributors(path: &Path) -> Result<Vec<Contributor>, AppError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let contributors: Vec<Contributor> = serde_json::from_str(&raw)?;
    validate_contributors(&contributors)?;

    tracing::info!(count = contributors.len(), "loaded contributors");
    Ok(contributors)
}
