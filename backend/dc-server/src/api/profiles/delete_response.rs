use serde::Serialize;

/// Confirmation body for account deletion
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub msg: String,
}
