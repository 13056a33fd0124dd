//! JSON request and response models for the HTTP API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/convert`.
///
/// # Example
///
/// ```
/// use signpose_server::models::ConvertRequest;
///
/// let json = r#"{"text": "xin chào"}"#;
/// let req: ConvertRequest = serde_json::from_str(json).unwrap();
/// assert_eq!(req.text, "xin chào");
/// assert_eq!(req.spoken_language, "vi");
/// assert_eq!(req.glosser, "dictionary");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertRequest {
    /// The input text to convert.
    pub text: String,
    /// Spoken-language code of the input.
    #[serde(default = "default_spoken_language")]
    pub spoken_language: String,
    /// Signed-language code of the output.
    #[serde(default = "default_signed_language")]
    pub signed_language: String,
    /// Glossing strategy identifier.
    #[serde(default = "default_glosser")]
    pub glosser: String,
}

fn default_spoken_language() -> String {
    "vi".to_string()
}

fn default_signed_language() -> String {
    "vsl".to_string()
}

fn default_glosser() -> String {
    "dictionary".to_string()
}

/// Response body for `POST /api/convert`.
///
/// # Example
///
/// ```
/// use signpose_server::models::ConvertResponse;
///
/// let resp = ConvertResponse { task_id: "d3b0…".into() };
/// let json = serde_json::to_string(&resp).unwrap();
/// assert!(json.contains("task_id"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    /// Opaque task identifier for the status endpoint.
    pub task_id: String,
}

/// Error response body.
///
/// # Example
///
/// ```
/// use signpose_server::models::ErrorResponse;
///
/// let err = ErrorResponse { error: "text must not be empty".into() };
/// let json = serde_json::to_string(&err).unwrap();
/// assert!(json.contains("must not be empty"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

/// Health check response.
///
/// # Example
///
/// ```
/// use signpose_server::models::HealthResponse;
///
/// let h = HealthResponse { status: "ok".into(), version: "0.1.0".into() };
/// let json = serde_json::to_string(&h).unwrap();
/// assert!(json.contains("ok"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}
