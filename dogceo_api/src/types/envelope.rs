use serde::{Deserialize, Serialize};

/// Value of `status` on every successful dog.ceo response.
pub const STATUS_SUCCESS: &str = "success";

/// The envelope every dog.ceo endpoint wraps its payload in.
///
/// On success `message` holds the payload. On failure `status` is `"error"`,
/// `message` is a human-readable string and `code` carries the HTTP status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}
