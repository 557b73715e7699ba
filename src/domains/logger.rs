use std::sync::Arc;

/// Logging port used by the follow logic.
///
/// Calls are best-effort: implementations must not block the caller and must
/// swallow their own failures.
pub trait DomainLogger: Send + Sync + 'static {
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
}

pub type DynLogger = Arc<dyn DomainLogger>;

/// Prefixes a message with the tag of the routine that emitted it.
pub fn tagged(caller: &str, msg: impl std::fmt::Display) -> String {
    format!("[{}] {}", caller, msg)
}
