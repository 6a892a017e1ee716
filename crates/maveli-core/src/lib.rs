//! maveli-core – domain logic for the Onam greeting service.
//!
//! Two pure pieces live here, kept free of I/O so the server crate can
//! exercise them without a runtime:
//! - [`classifier`]: the heuristic that decides whether a submitted name
//!   looks like a real human name.
//! - [`greeting`]: King Mahabali's remark generator for either verdict.

pub mod classifier;
pub mod greeting;

pub use classifier::is_plausible_name;
pub use greeting::{comment_for, comment_pool};
