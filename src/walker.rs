//! Sequence walker
//!
//! Hands every element of an integer slice to a caller-supplied closure, in
//! order, on the calling thread. The walker does no filtering or early exit of
//! its own; a closure that wants to skip an element simply returns.

use tracing::trace;

/// Invoke `action` once per element of `sequence`, first to last.
///
/// An empty slice never invokes `action`. The slice is only borrowed, so it is
/// unchanged when the call returns.
///
/// ```
/// let mut seen = Vec::new();
/// highorder::for_each(&[1, 2, 3], |n| seen.push(n));
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
pub fn for_each<F>(sequence: &[i32], mut action: F)
where
    F: FnMut(i32),
{
    trace!(len = sequence.len(), "walking sequence");
    for &n in sequence {
        action(n);
    }
}
