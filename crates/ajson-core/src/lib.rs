//! # ajson
//!
//! Arena-backed JSON value library: parse JSON text into an in-memory value
//! tree, navigate it with type-safe accessors, and serialize it back to
//! compact JSON text.
//!
//! Two parse modes share one grammar:
//!
//! - [`parse`] allocates each node on the heap and returns an owned
//!   [`JsonValue`];
//! - [`parse_with_arena`] routes string and container storage through a
//!   reusable [`Arena`], returning a [`ArenaValue`] that borrows it. The
//!   borrow ties the tree's lifetime to the arena: [`Arena::clear`] takes
//!   `&mut self`, so reading a value after a reset is a compile error, not a
//!   runtime hazard.
//!
//! ```
//! use ajson_rs::{parse, parse_with_arena, Arena};
//!
//! let owned = parse(r#"{"name":"John","age":30}"#)?;
//! assert_eq!(owned.get("age").unwrap().try_i64()?, 30);
//!
//! let mut arena = Arena::with_capacity(4096)?;
//! {
//!     let doc = parse_with_arena(r#"[1,2,3]"#, &arena)?;
//!     assert_eq!(doc.get_index(2).unwrap().try_i64()?, 3);
//! }
//! arena.clear(); // O(1) reset, all backing storage reusable
//! # Ok::<(), ajson_rs::Error>(())
//! ```

#![warn(rust_2018_idioms)]
#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod error;
pub mod memory;
pub mod parser;
pub mod serializer;
pub mod value;

pub use error::{Error, Result};
pub use memory::{Arena, ArenaStats};
pub use parser::{parse, parse_with_arena, Parser, ParserConfig, DEFAULT_MAX_DEPTH};
pub use serializer::to_string;
pub use value::{ArenaValue, JsonValue};

/// Re-export of the commonly used types
pub mod prelude {
    pub use super::{
        parse, parse_with_arena, to_string, Arena, ArenaValue, Error, JsonValue, Parser,
        ParserConfig, Result,
    };
}
