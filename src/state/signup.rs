#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::net::types::{ApiError, SignupRequest};
use crate::state::password::PasswordPolicy;
use crate::util::notify::Notice;

const MSG_REQUIRED: &str = "ID and password are required.";
const MSG_PASSWORD_USABLE: &str = "This password is usable.";
const MSG_SIGNED_UP: &str = "Signed up successfully.";

/// Registration form state.
///
/// All mutation goes through the transition methods below so the submission
/// flow can be exercised without a browser. The rendering layer wraps this
/// in an `RwSignal`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SignupState {
    pub user_id: String,
    pub password: String,
    pub email: String,
    /// Advisory / required-fields text shown inline under the password
    /// input. Set when all policy criteria hold ("usable password") or when
    /// a submit was attempted with missing required fields; empty otherwise.
    pub message: String,
    pub password_focused: bool,
    pub criteria: PasswordPolicy,
    pub submitting: bool,
}

impl SignupState {
    pub fn set_user_id(&mut self, value: String) {
        self.user_id = value;
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    /// Store the password and re-derive the policy result.
    ///
    /// The inline message appears when the password meets every criterion
    /// and clears otherwise — inverted from the usual "message on error"
    /// convention, but that is the product's observed behavior.
    pub fn set_password(&mut self, value: String) {
        self.criteria = PasswordPolicy::evaluate(&value);
        self.password = value;
        self.message = if self.criteria.satisfied() {
            MSG_PASSWORD_USABLE.to_owned()
        } else {
            String::new()
        };
    }

    pub fn focus_password(&mut self) {
        self.password_focused = true;
    }

    pub fn blur_password(&mut self) {
        self.password_focused = false;
    }

    /// The criteria checklist renders only while the password input is
    /// focused and at least one criterion is still unmet.
    pub fn show_criteria(&self) -> bool {
        self.password_focused && !self.criteria.satisfied()
    }

    /// Start a submission attempt.
    ///
    /// Returns the request payload to send, or `None` when no network call
    /// may be issued: either a request is already in flight, or a required
    /// field is empty (which sets the required-fields message instead).
    pub fn begin_submit(&mut self) -> Option<SignupRequest> {
        if self.submitting {
            return None;
        }
        if self.user_id.is_empty() || self.password.is_empty() {
            self.message = MSG_REQUIRED.to_owned();
            return None;
        }

        self.submitting = true;
        Some(SignupRequest {
            user_id: self.user_id.clone(),
            password: self.password.clone(),
            email: self.email.clone(),
        })
    }

    /// Finish a submission attempt, mapping the outcome to a user notice.
    ///
    /// Every branch — success and all failures alike — discards the entered
    /// credentials and messages; there is no "fix and resubmit" retention.
    pub fn resolve_submit(&mut self, outcome: Result<String, ApiError>) -> Notice {
        let notice = match outcome {
            Ok(_) => Notice::success(MSG_SIGNED_UP),
            Err(ApiError::Status(401)) => Notice::error(
                "This ID is already registered. Please sign up with a different ID \
                 (status code: 401)",
            ),
            Err(ApiError::Status(status)) => Notice::error(format!(
                "An unknown error occurred. Please contact the operator (status code: {status})"
            )),
            Err(ApiError::Transport(_)) => Notice::error(
                "A problem occurred during sign-up. Please check your network connection.",
            ),
        };
        self.clear();
        notice
    }

    /// Reset every field, message, and derived value.
    fn clear(&mut self) {
        self.user_id.clear();
        self.password.clear();
        self.email.clear();
        self.message.clear();
        self.criteria = PasswordPolicy::default();
        self.submitting = false;
    }
}
