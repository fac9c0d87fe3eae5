use tracing::{info, warn};
use super::Notifier;

/// Surfaces notifications as tracing events under the `cart_store::notify`
/// target, standing in for a toast widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(target: "cart_store::notify", "{message}");
    }

    fn error(&self, message: &str) {
        warn!(target: "cart_store::notify", "{message}");
    }
}
