//! JSON response envelope and input decoding shared by the exports.

use canopy_types::{CanopyError, ErrorCode, Result, Selection};
use serde::{Deserialize, Serialize};

/// `{ "success": bool, "data": T | null, "error": CanopyError | null }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<CanopyError>,
}

impl<T> From<Result<T>> for Envelope<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                data: Some(data),
                error: None,
            },
            Err(error) => Self {
                success: false,
                data: None,
                error: Some(error),
            },
        }
    }
}

/// Serialize an envelope, falling back to a hand-built error document.
pub fn respond<T: Serialize>(result: Result<T>) -> String {
    serde_json::to_string(&Envelope::from(result)).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"data":null,"error":{{"code":{},"category":"validation","message":"Serialization error: {}"}}}}"#,
            ErrorCode::MALFORMED_INPUT.0,
            e.to_string().replace('"', "'")
        )
    })
}

/// Decode a JSON array of selections.
pub fn parse_selections(json: &str) -> Result<Vec<Selection>> {
    serde_json::from_str(json).map_err(|e| {
        CanopyError::new(
            ErrorCode::MALFORMED_INPUT,
            format!("selections must be a JSON array of {{name, quantity, survival_rate}}: {e}"),
        )
        .with_subject("selections")
    })
}

/// Convert a JavaScript horizon to the estimator's unsigned form.
pub fn horizon(years: i32) -> Result<u32> {
    u32::try_from(years)
        .ok()
        .filter(|&y| y > 0)
        .ok_or_else(|| CanopyError::non_positive_horizon(i64::from(years)))
}
