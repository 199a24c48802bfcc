use super::*;
use crate::util::notify::NoticeKind;

fn filled() -> SignupState {
    let mut state = SignupState::default();
    state.set_user_id("alice".to_owned());
    state.set_password("Abc12!".to_owned());
    state.set_email("alice@example.com".to_owned());
    state
}

fn assert_cleared(state: &SignupState) {
    assert!(state.user_id.is_empty());
    assert!(state.password.is_empty());
    assert!(state.email.is_empty());
    assert!(state.message.is_empty());
    assert_eq!(state.criteria, crate::state::password::PasswordPolicy::default());
    assert!(!state.submitting);
}

// =============================================================
// Password editing and the advisory message
// =============================================================

#[test]
fn set_password_rederives_criteria() {
    let mut state = SignupState::default();
    state.set_password("Ab1".to_owned());
    assert!(state.criteria.has_uppercase);
    assert!(state.criteria.has_number);
    assert!(!state.criteria.has_special_char);
    assert!(!state.criteria.is_long_enough);
}

#[test]
fn advisory_message_appears_only_when_all_criteria_hold() {
    let mut state = SignupState::default();

    state.set_password("Abc12!".to_owned());
    assert!(state.message.contains("usable"));

    // Editing back below the policy clears the message again.
    state.set_password("Abc12".to_owned());
    assert!(state.message.is_empty());
}

#[test]
fn criteria_checklist_shown_while_focused_and_unmet() {
    let mut state = SignupState::default();
    state.set_password("abc".to_owned());

    assert!(!state.show_criteria());
    state.focus_password();
    assert!(state.show_criteria());

    state.set_password("Abc12!".to_owned());
    assert!(!state.show_criteria());

    state.set_password("abc".to_owned());
    state.blur_password();
    assert!(!state.show_criteria());
}

// =============================================================
// begin_submit: local validation and the in-flight guard
// =============================================================

#[test]
fn empty_user_id_blocks_submission_locally() {
    let mut state = SignupState::default();
    state.set_password("Abc12!".to_owned());

    assert!(state.begin_submit().is_none());
    assert!(state.message.contains("required"));
    assert!(!state.submitting);
}

#[test]
fn empty_password_blocks_submission_locally() {
    let mut state = SignupState::default();
    state.set_user_id("alice".to_owned());

    assert!(state.begin_submit().is_none());
    assert!(state.message.contains("required"));
}

#[test]
fn valid_fields_produce_a_request_and_mark_in_flight() {
    let mut state = filled();
    let req = state.begin_submit().expect("request");

    assert_eq!(req.user_id, "alice");
    assert_eq!(req.password, "Abc12!");
    assert_eq!(req.email, "alice@example.com");
    assert!(state.submitting);
}

#[test]
fn email_is_optional_and_unvalidated() {
    let mut state = SignupState::default();
    state.set_user_id("bob".to_owned());
    state.set_password("weak".to_owned()); // policy is advisory, not blocking

    let req = state.begin_submit().expect("request");
    assert_eq!(req.email, "");
}

#[test]
fn second_submit_while_in_flight_is_rejected() {
    let mut state = filled();
    assert!(state.begin_submit().is_some());

    let before = state.clone();
    assert!(state.begin_submit().is_none());
    assert_eq!(state, before);
}

// =============================================================
// resolve_submit: outcome mapping and field clearing
// =============================================================

#[test]
fn success_clears_everything_and_reports_success() {
    let mut state = filled();
    state.begin_submit().expect("request");

    let notice = state.resolve_submit(Ok("{}".to_owned()));
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_cleared(&state);
}

#[test]
fn status_401_reports_duplicate_id_with_code() {
    let mut state = filled();
    state.begin_submit().expect("request");

    let notice = state.resolve_submit(Err(ApiError::Status(401)));
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.message.contains("401"));
    assert!(notice.message.contains("already registered"));
    assert_cleared(&state);
}

#[test]
fn other_status_reports_generic_error_with_code() {
    let mut state = filled();
    state.begin_submit().expect("request");

    let notice = state.resolve_submit(Err(ApiError::Status(500)));
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.message.contains("500"));
    assert!(notice.message.contains("operator"));
    assert_cleared(&state);
}

#[test]
fn transport_failure_reports_connectivity_without_a_code() {
    let mut state = filled();
    state.begin_submit().expect("request");

    let notice = state.resolve_submit(Err(ApiError::Transport("connection refused".to_owned())));
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.message.contains("network"));
    assert!(!notice.message.chars().any(|c| c.is_ascii_digit()));
    assert_cleared(&state);
}

#[test]
fn sequential_resubmission_issues_independent_requests() {
    let mut state = SignupState::default();

    for _ in 0..2 {
        state.set_user_id("alice".to_owned());
        state.set_password("Abc12!".to_owned());
        let req = state.begin_submit().expect("request");
        assert_eq!(req.user_id, "alice");
        state.resolve_submit(Err(ApiError::Status(401)));
        assert_cleared(&state);
    }
}
