/// Marker trait for intents: user actions (key presses, form edits) and
/// system events (server responses).
pub trait Intent: Send + 'static {}
