//! Entry ordering for directory listings.
//!
//! This module provides the [`compare_names`] comparator used to order the
//! entries of a single directory before they are printed.
//!
//! # Example
//!
//! ```rust
//! use treescope::sort::sort_names;
//!
//! let mut names = vec![
//!     "cat.png".to_string(),
//!     "Dog.png".to_string(),
//!     "Cat.png".to_string(),
//! ];
//! sort_names(&mut names);
//!
//! assert_eq!(names, ["Cat.png", "cat.png", "Dog.png"]);
//! ```

mod name_order;

pub use name_order::{compare_names, sort_names};
