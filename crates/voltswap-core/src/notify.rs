// ── User-facing notifications ──
//
// Transient feedback seam for payment and mutation outcomes. List
// fetches never notify: their failures are logged and absorbed into
// neutral snapshots, and screens render the empty state.

use tracing::{error, info};

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// Presentation seam for transient user feedback (toast equivalent).
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str, title: Option<&str>);
}

/// Default notifier that routes through `tracing`.
///
/// App shells replace this with a UI-backed implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, kind: NoticeKind, message: &str, title: Option<&str>) {
        match kind {
            NoticeKind::Error => error!(?title, "{message}"),
            NoticeKind::Success | NoticeKind::Info => info!(?title, "{message}"),
        }
    }
}
