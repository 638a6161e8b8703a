//! mldev_core: Core utilities for the mldev Standard ML front end.
//!
//! Provides text positions, the AST arena and string interning used by the
//! scanner, the binding model and the tools built on top of them.

pub mod arena;
pub mod intern;
pub mod text;

// Re-export commonly used types
pub use arena::AstArena;
pub use intern::{InternedString, StringInterner};
pub use text::{LineMap, TextRange, TextSpan};
