pub use tokio_util::sync::CancellationToken;

/// Caller-supplied execution context passed to every handler invocation.
/// The adapter starts no timers and never retries; handlers are expected to
/// honor the cancellation token themselves.
#[derive(Clone, Debug, Default)]
pub struct ToolContext {
    pub cancellation: CancellationToken,
}

impl ToolContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancellation(cancellation: CancellationToken) -> Self {
        Self { cancellation }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }
}
