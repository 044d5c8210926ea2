use tracing::warn;

/// Delivery seam for the alert surface. Implementations are fire-and-forget:
/// the watch loop never waits on acknowledgement, so scanning continues while
/// the user reads the alert.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Default surface: the alert text goes to the log at WARN.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        warn!("{message}");
    }
}
