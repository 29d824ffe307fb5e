use serde::{Deserialize, Serialize};

/// The JSON body sent in reply to requests that change the ledger.
///
/// Successful requests serialize as `{"success":true}`, failures carry a
/// message for the client, e.g. `{"success":false,"message":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the request was carried out.
    pub success: bool,
    /// Why the request failed. Omitted on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    /// A response indicating the request succeeded.
    pub fn success() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// A response indicating the request failed because of `message`.
    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: Some(message.to_owned()),
        }
    }
}
