use crate::core::InstanceHeader;
use crate::core::instances::Instance;
use crate::streams::StreamError;
use std::sync::Arc;

/// Pull-based, one-shot source of [`Instance`]s.
///
/// Constructing an implementation is the "open" step: the header is parsed
/// and validated before any instance can be pulled. All returned instances
/// conform to the same, immutable [`InstanceHeader`]. Streams are not
/// restartable; a fresh pass needs a fresh stream bound to the source.
pub trait Stream {
    /// Returns the stream header (relation name, attributes, class index).
    fn header(&self) -> Arc<InstanceHeader>;

    /// `true` iff at least one more instance can be produced.
    ///
    /// Cheap and side effect free. A pending malformed record still counts
    /// as "more"; pulling it yields the format error.
    fn has_more_instances(&self) -> bool;

    /// Produces the next instance in source order.
    ///
    /// Fails with [`StreamError::Exhausted`] once [`has_more_instances`]
    /// has returned `false`.
    ///
    /// [`has_more_instances`]: Stream::has_more_instances
    fn next_instance(&mut self) -> Result<Box<dyn Instance>, StreamError>;
}
