//! Flag types attached to AST nodes.

bitflags::bitflags! {
    /// Flags for AST nodes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u32 {
        const NONE                  = 0;
        /// Built by a tool rather than parsed from source text.
        const SYNTHESIZED           = 1 << 0;
        /// A constructor name rather than a variable (e.g. `SOME`, `nil`).
        const CONSTRUCTOR           = 1 << 1;
    }
}
