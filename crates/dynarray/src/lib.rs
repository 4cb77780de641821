//! `dynarray`: a generic, growable, contiguous sequence container.
//!
//! This crate provides:
//!
//! - **[`DynamicArray`]**: indexed access, append, removal by index or value,
//!   membership tests and forward iteration over a single contiguous slot
//!   buffer that doubles when it runs short
//! - **Checked access everywhere**: method accessors return
//!   [`Error::IndexOutOfRange`], `array[i]` panics with the same message
//! - **Two removal policies** ([`RemovalPolicy`]): rebuild storage to the
//!   exact length, or shift in place and keep the capacity
//!
//! Storage reallocation is reported through `dynarray-log` at `debug` level;
//! set `DYNARRAY_LOG=debug` and call [`dynarray_log::init_from_env`] to see it.
//!
//! # Example
//!
//! ```
//! use dynarray::{DynamicArray, Error};
//!
//! let mut array = DynamicArray::new(2)?;
//! array.add("a");
//! array.add("b");
//!
//! assert_eq!(array.capacity(), 4);
//! assert_eq!(array.index_of(&"b"), Some(1));
//! assert_eq!(array.get(7), Err(Error::IndexOutOfRange { index: 7, len: 2 }));
//! # Ok::<(), Error>(())
//! ```

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
pub mod iter;

pub use array::{ArrayStats, DynamicArray};
pub use config::{ArrayConfig, DEFAULT_CAPACITY, RemovalPolicy};
pub use error::{Error, Result};
