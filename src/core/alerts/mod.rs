// Alert system module: rate limiting and delivery of pattern-match alerts.
//
// Architecture:
// - gate.rs: global cooldown between alerts
// - model.rs: fired-alert event and message formatting
// - notifier.rs: delivery seam, log-backed by default

pub mod gate;
pub mod model;
pub mod notifier;
