#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Body of `POST /api/user/signup`. Field names follow the server's
/// camelCase wire contract.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub user_id: String,
    pub password: String,
    pub email: String,
}

/// Body of `POST /api/user/login`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_id: String,
    pub password: String,
}

/// Failure of one API call.
///
/// `Status` means the server answered with a non-success HTTP status;
/// `Transport` means no HTTP response was received at all (connection
/// refused, DNS failure, and so on).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    Status(u16),
    Transport(String),
}
