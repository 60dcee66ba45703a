//! Generic Priority Queue for Rust
//!
//! This crate provides [`MinQueue`], a priority queue that maps totally
//! ordered keys to arbitrary values, backed by an array-based binary
//! min-heap.
//!
//! # Features
//!
//! - **Min-ordered**: `dequeue` and `peek` always surface the entry with the
//!   smallest key; equal keys drain before any larger key
//! - **Generic**: any `K: Ord` key with any value type, values never compared
//! - **Fail-fast and fallible APIs**: `dequeue`/`peek` panic on an empty
//!   queue, `try_dequeue`/`try_peek` return `Option` instead
//! - **O(log n)** enqueue and dequeue, **O(1)** peek and length queries
//!
//! # Example
//!
//! ```rust
//! use minqueue::MinQueue;
//!
//! let mut tasks = MinQueue::new();
//! tasks.enqueue(2, "write docs");
//! tasks.enqueue(1, "fix bug");
//! tasks.enqueue(3, "refactor");
//!
//! assert_eq!(tasks.dequeue(), (1, "fix bug"));
//! assert_eq!(tasks.peek(), (&2, &"write docs"));
//! assert_eq!(tasks.len(), 2);
//! ```
//!
//! # Key ordering
//!
//! Keys must implement [`Ord`]. Floating-point keys can be used through a
//! total-order wrapper such as one built on [`f64::total_cmp`], since `f64`
//! itself is only `PartialOrd`.
//!
//! # Thread safety
//!
//! `MinQueue` is a plain single-threaded container. It is `Send` and `Sync`
//! when its key and value types are, but all mutation requires `&mut self`;
//! wrap it in a lock for shared use.

pub mod queue;

// Re-export the queue type for convenience
pub use queue::MinQueue;
