//! Stable SHA-256 fingerprint of a selection snapshot.

use canopy_types::{CanopyError, ErrorCode, Result, Selection};
use sha2::{Digest, Sha256};

/// Hex SHA-256 over the active selections sorted by name.
///
/// Two snapshots that differ only in entry order, or in zero-quantity
/// entries, share a fingerprint.
pub fn selection_fingerprint(selections: &[Selection]) -> Result<String> {
    let mut active: Vec<&Selection> = selections.iter().filter(|s| s.is_active()).collect();
    active.sort_by(|a, b| a.name.cmp(&b.name));

    let canonical = serde_json::to_vec(&active).map_err(|e| {
        CanopyError::new(
            ErrorCode::MALFORMED_INPUT,
            format!("cannot encode selections: {e}"),
        )
    })?;

    let digest = Sha256::digest(&canonical);
    Ok(digest.iter().map(|byte| format!("{byte:02x}")).collect())
}
