//! User-facing notifications behind a pluggable sink.
//!
//! Form state transitions return a [`Notice`]; components hand it to the
//! [`Notifier`] from context. Production uses [`AlertNotifier`] (a blocking
//! `window.alert`), tests substitute a recording implementation, so no test
//! ever opens a real dialog.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Tone of a notice. Errors are also mirrored to the console log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One user-facing message produced by a submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
}

/// Capability for raising a notice to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Browser implementation: blocking alert dialog, plus a console log entry
/// for error notices. Outside the browser (SSR) it is inert.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: &Notice) {
        #[cfg(feature = "hydrate")]
        {
            if notice.kind == NoticeKind::Error {
                log::warn!("{}", notice.message);
            }
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&notice.message);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = notice;
        }
    }
}
