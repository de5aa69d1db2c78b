//! List fetches made only to display rows.

use pcl_client::ClientError;

/// Rows of a list fetch. A failure other than a rejected session is logged
/// and yields no rows, so the command still renders and exits cleanly.
///
/// # Errors
///
/// Returns [`ClientError::Unauthorized`] when the backend refused the token.
pub fn rows_or_empty<T>(
    label: &str,
    result: Result<Vec<T>, ClientError>,
) -> Result<Vec<T>, ClientError> {
    match result {
        Ok(rows) => Ok(rows),
        Err(ClientError::Unauthorized) => Err(ClientError::Unauthorized),
        Err(error) => {
            tracing::warn!(%error, label, "list fetch failed");
            Ok(Vec::new())
        }
    }
}
