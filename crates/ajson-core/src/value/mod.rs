//! JSON value model
//!
//! Two representations of the same seven-variant sum: [`JsonValue`] owns its
//! payloads on the heap, [`ArenaValue`] borrows them from an
//! [`Arena`](crate::memory::Arena).

mod arena;
mod owned;

pub use arena::ArenaValue;
pub use owned::JsonValue;
