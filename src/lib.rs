//! A doubly linked list bounded by a sentinel pair.
//! *indexed like a `Vec`, walked like a list!*
//!
//! Index lookups walk from whichever end is closer, so random access is
//! bounded by `len / 2` steps. Mutable cursors can remove elements
//! mid-traversal without restarting the walk.
//!
//! ## Example
//!
//! ```rust
//! use bilist::BiList;
//!
//! let mut list = BiList::new();
//!
//! list.push_back(1);
//! list.push_back(2);
//! list.push_back(3);
//!
//! assert_eq!(list.to_string(), "[1, 2, 3]");
//!
//! assert_eq!(list.remove_at(1), Ok(2));
//! assert_eq!(list.to_string(), "[1, 3]");
//!
//! assert_eq!(list.index_of(&3), Some(1));
//! assert!(!list.contains(&5));
//!
//! let mut cursor = list.cursor_mut();
//! while cursor.advance() {
//!     if cursor.current() == Some(&3) {
//!         let _ = cursor.remove();
//!     }
//! }
//!
//! assert_eq!(list.to_string(), "[1]");
//! ```

#![allow(forbidden_lint_groups)]
#![forbid(clippy::all)]
#![allow(clippy::option_map_unit_fn)]

mod error;
mod iter;
mod list;

pub use error::OutOfBounds;
pub use iter::{CursorBackMut, CursorMut, IntoIter, Iter, IterBack, IterMut};
pub use list::BiList;
