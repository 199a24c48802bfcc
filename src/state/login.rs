#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::types::{ApiError, LoginRequest};
use crate::util::notify::Notice;

/// Login form state. Required-field enforcement is left to the browser's
/// `required` input attributes, so the only local gate here is the
/// in-flight guard.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoginState {
    pub user_id: String,
    pub password: String,
    pub submitting: bool,
}

impl LoginState {
    pub fn set_user_id(&mut self, value: String) {
        self.user_id = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    /// Start a submission attempt; `None` while a request is in flight.
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.submitting {
            return None;
        }

        self.submitting = true;
        Some(LoginRequest {
            user_id: self.user_id.clone(),
            password: self.password.clone(),
        })
    }

    /// Finish a submission attempt, mapping the outcome to a user notice.
    ///
    /// The success payload is the identifier echoed by the server. HTTP
    /// failures carry their real status code in every branch; only a
    /// transport failure reports the code as absent.
    pub fn resolve_submit(&mut self, outcome: Result<String, ApiError>) -> Notice {
        let notice = match outcome {
            Ok(payload) => Notice::success(format!("Logged in. user id: {payload}")),
            Err(ApiError::Status(401)) => {
                Notice::error("Invalid ID or password. (status code: 401)")
            }
            Err(ApiError::Status(status)) => Notice::error(format!(
                "An unknown error occurred. Please contact the operator. \
                 (status code: {status})"
            )),
            Err(ApiError::Transport(_)) => Notice::error(
                "A network error occurred. Please check your connection. (status code: none)",
            ),
        };
        self.clear();
        notice
    }

    fn clear(&mut self) {
        self.user_id.clear();
        self.password.clear();
        self.submitting = false;
    }
}
