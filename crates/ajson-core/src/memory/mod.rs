//! Memory management for arena-backed parsing

pub mod arena;

pub use arena::{Arena, ArenaStats};
