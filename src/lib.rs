//! A Bloom filter sized from an expected element count and a false-positive tolerance.
//!
//! ```
//! use probable_set::BloomFilter;
//!
//! let mut seen = BloomFilter::new(10_000, 0.001)?;
//! seen.add("https://example.com/a");
//!
//! assert!(seen.contains("https://example.com/a"));
//! assert!(!seen.contains("https://example.com/b"));
//! # Ok::<(), probable_set::BloomError>(())
//! ```
//!
//! The hash used for probing is chosen with Cargo features: `murmur3` (default),
//! `xxh3`, `shake128` or `blake3`. Exactly one must be enabled.

pub mod bloom_filters;
pub mod error;
pub mod hashing;
pub mod params;

pub use bloom_filters::BloomFilter;
pub use error::{BloomError, Result};
pub use params::FilterParams;
