//! # Radixsorter
//!
//! `radixsorter` sorts sequences of arbitrary elements by an integer key extracted from each
//! element, using a least-significant-digit (LSD) **radix sort** whose base is chosen from the
//! input size.
//!
//! ## Key Features
//!
//! - **Any element type**: Elements are never compared or inspected. A caller-supplied projection
//!   maps each element to an integer key, and is evaluated exactly once per element.
//! - **Stable**: Elements with equal keys keep their original relative order.
//! - **Negative keys**: Keys are normalized by the minimum key, so any mix of negative and
//!   positive keys of any primitive integer type is supported (see [`RadixKey`]).
//! - **Size-adaptive base**: Each pass consumes `ceil(log2(n))` key bits, balancing the number
//!   of passes against the bucket array size. A fixed digit width can be configured instead.
//! - **Non-destructive**: The input is moved (or borrowed) and a new sorted `Vec` is returned.
//!   [`radix_sort_indices`] returns the sorting permutation without touching the elements.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use radixsorter::radix_sort;
//!
//! let data = vec![5, 3, 8, 3, 1];
//! assert_eq!(radix_sort(&data), vec![1, 3, 3, 5, 8]);
//! ```
//!
//! ### Sorting by Key
//!
//! ```rust
//! use radixsorter::radix_sort_by_key;
//!
//! #[derive(Debug, PartialEq)]
//! struct Person {
//!     name: &'static str,
//!     age: u32,
//! }
//!
//! let people = vec![
//!     Person { name: "a", age: 30 },
//!     Person { name: "b", age: 25 },
//!     Person { name: "c", age: 30 },
//! ];
//!
//! let sorted = radix_sort_by_key(people, |p| p.age);
//! let names: Vec<_> = sorted.iter().map(|p| p.name).collect();
//!
//! // "a" stays ahead of "c": both are 30 and "a" came first.
//! assert_eq!(names, vec!["b", "a", "c"]);
//! ```
//!
//! ### Fallible Keys
//!
//! When the projection can fail, use [`try_radix_sort_by_key`]. The first failure is returned
//! as [`SortError::InvalidKey`] and no partial result is produced.
//!
//! ## Performance Characteristics
//!
//! With `n` elements and a key span of `m = max - min`, the sort performs
//! `ceil(log2(m + 1) / ceil(log2(n)))` bucket passes of `O(n)` each. When `m` is polynomial in `n`
//! the pass count is constant and the sort runs in linear time.
//!
//! - **Memory Overhead**: One keyed pair per element (the element plus a `u128` key), and one
//!   bucket array of `2^ceil(log2(n))` buckets reused by every pass.
//! - **Single-threaded**: The sort runs to completion on the calling thread.

pub mod algo;
pub mod config;
pub mod core;
pub mod error;
pub use algo::{
    RadixSorter, pass_count, radix_sort, radix_sort_by_key, radix_sort_indices,
    try_radix_sort_by_key,
};
pub use config::{DigitWidth, SortConfig};
pub use core::RadixKey;
pub use error::SortError;

pub mod prelude {
    pub use crate::algo::{
        RadixSorter, radix_sort, radix_sort_by_key, radix_sort_indices, try_radix_sort_by_key,
    };
    pub use crate::config::{DigitWidth, SortConfig};
    pub use crate::core::RadixKey;
    pub use crate::error::SortError;
}
