//! In-order traversal
//!
//! [`morris_in_order`] is the engine: O(1) extra space, no recursion,
//! no explicit stack. [`stack_in_order`] is the textbook explicit-stack
//! walk kept as a reference to check it against.

mod morris;
pub mod sink;
mod stack;

pub use morris::morris_in_order;
pub use sink::Sink;
pub use stack::stack_in_order;
