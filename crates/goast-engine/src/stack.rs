//! Stack headroom for the recursive passes over nested syntax.
//!
//! Lowering and walking recurse once per nesting level. Rayon workers and test
//! threads start with small stacks, so each level first checks the remaining
//! space and continues on a heap-allocated segment when it runs low.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 64 * 1024;
/// Size of each new segment.
const SEGMENT: usize = 1024 * 1024;

pub(crate) fn with_headroom<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}
