//! # Sharing Strategies
//!
//! A [`Generator`](crate::Generator) is an owned value; passing it to the
//! code that draws is the primary way to share a stream. This module offers
//! explicit scopes for call sites that cannot take a generator argument.
//!
//! | Scope | One instance per | Synchronisation |
//! |---|---|---|
//! | [`Local<G>`] | instantiation and thread | none |
//! | [`Global<G>`] | instantiation and process | one `Mutex` lock per draw |
//! | [`SyncGenerator<G>`] | caller-owned value | one `Mutex` lock per draw |
//!
//! `Local` and `Global` construct their instance lazily on first use with
//! `G::default()`, which seeds it exactly once, and keep it for the rest of
//! the scope's lifetime. There is no reset or reseed operation.
//!
//! An instantiation is identified by its full type: two `Local` generators
//! differing only in their seed source are distinct instances.

mod global;
mod local;
mod sync;

pub use global::Global;
pub use local::Local;
pub use sync::SyncGenerator;
