//! Value sinks
//!
//! The engine never prints; it hands each value to a caller-supplied
//! sink in in-order sequence.

use std::fmt;

/// Receives values in traversal order
pub trait Sink<T> {
    /// Accept the next value
    fn accept(&mut self, value: &T);
}

impl<T: Clone> Sink<T> for Vec<T> {
    #[inline]
    fn accept(&mut self, value: &T) {
        self.push(value.clone());
    }
}

impl<T, S: Sink<T> + ?Sized> Sink<T> for &mut S {
    #[inline]
    fn accept(&mut self, value: &T) {
        (**self).accept(value);
    }
}

/// Sink backed by a closure, see [`from_fn`]
pub struct FromFn<F>(F);

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<T, F: FnMut(&T)> Sink<T> for FromFn<F> {
    #[inline]
    fn accept(&mut self, value: &T) {
        (self.0)(value);
    }
}

/// Wrap a closure as a sink
///
/// ```
/// use morris::traversal::{morris_in_order, sink};
///
/// let mut tree = morris::tree::sample();
/// let mut sum = 0;
/// morris_in_order(&mut tree, &mut sink::from_fn(|v: &i64| sum += v));
/// assert_eq!(sum, 15);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed<S: Sink<u8>>(mut sink: S, values: &[u8]) {
        for v in values {
            sink.accept(v);
        }
    }

    #[test]
    fn test_vec_sink_appends() {
        let mut out = vec![9];
        feed(&mut out, &[1, 2, 3]);
        assert_eq!(out, vec![9, 1, 2, 3]);
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = String::new();
        feed(from_fn(|v: &u8| seen.push_str(&v.to_string())), &[4, 2, 5]);
        assert_eq!(seen, "425");
    }
}
