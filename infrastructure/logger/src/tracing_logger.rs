use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target every use-case event is emitted under, for `RUST_LOG` filtering.
const TARGET: &str = "shopping_list";

/// Forwards use-case log lines to `tracing`.
///
/// Each event carries a `layer = "application"` field so it can be told
/// apart from the adapter's own transaction events.
pub struct TracingLogger;

impl Logger for TracingLogger {
    /// Business events: registrations, lists created, items bought.
    fn info(&self, message: &str) {
        info!(target: TARGET, layer = "application", "{message}");
    }

    /// Rejected requests such as unknown owners or foreign lists.
    fn warn(&self, message: &str) {
        warn!(target: TARGET, layer = "application", "{message}");
    }

    fn error(&self, message: &str) {
        error!(target: TARGET, layer = "application", "{message}");
    }

    fn debug(&self, message: &str) {
        debug!(target: TARGET, layer = "application", "{message}");
    }
}
