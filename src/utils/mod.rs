//! Utility functions and helpers.

pub mod gravatar;

pub use gravatar::{hash_email, GravatarHelper};
