//! mldev_ast: Abstract syntax tree definitions for the Standard ML front end.
//!
//! Defines the token and node kinds, node flags, and the binding model
//! (`Bind`, `ValBind`) together with the pattern and expression trees a
//! binding owns.

pub mod node;
pub mod syntax_kind;
pub mod types;
pub mod visitor;

// Re-export key types
pub use node::*;
pub use syntax_kind::SyntaxKind;
pub use types::*;
