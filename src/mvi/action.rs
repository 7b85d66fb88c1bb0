//! Base trait for actions dispatched into a store.

/// Marker trait for action values.
///
/// Actions describe either the lifecycle of a remote request (started,
/// finished) or a committed result (data loaded, payment accepted). They
/// carry everything the reducer needs and nothing else.
pub trait Action: Send + 'static {
    /// Short tag used in dispatch logs.
    fn name(&self) -> &'static str;
}
