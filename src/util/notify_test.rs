use super::*;

// =============================================================
// Notice constructors
// =============================================================

#[test]
fn success_notice_carries_message_and_kind() {
    let n = Notice::success("done");
    assert_eq!(n.kind, NoticeKind::Success);
    assert_eq!(n.message, "done");
}

#[test]
fn error_notice_carries_message_and_kind() {
    let n = Notice::error("nope");
    assert_eq!(n.kind, NoticeKind::Error);
    assert_eq!(n.message, "nope");
}

// =============================================================
// Notifier trait
// =============================================================

#[test]
fn recording_notifier_observes_notices() {
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording(Mutex<Vec<Notice>>);

    impl Notifier for Recording {
        fn notify(&self, notice: &Notice) {
            self.0.lock().unwrap().push(notice.clone());
        }
    }

    let sink = Recording::default();
    sink.notify(&Notice::error("first"));
    sink.notify(&Notice::success("second"));

    let seen = sink.0.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].message, "first");
    assert_eq!(seen[1].kind, NoticeKind::Success);
}
