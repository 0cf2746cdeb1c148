//! Shared helpers.

pub mod date;
pub mod link;
pub mod path;
pub mod plural;
pub mod slug;
pub mod xml;

pub use plural::plural_count;
