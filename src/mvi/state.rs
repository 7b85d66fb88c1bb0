//! Base trait for slice state.

/// Marker trait for a slice of application state.
///
/// Slices are replaced rather than mutated: a reducer receives the old
/// value by move and returns the next one.
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}
