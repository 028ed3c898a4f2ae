//! Domain types driven through `CustomGenerator`.
//!
//! - [`Item`]: a record with an integral id and a real price
//! - [`RandomString`]: strings drawn from a character set

mod item;
mod random_string;

pub use item::Item;
pub use random_string::{RandomString, DEFAULT_CHARSET};
