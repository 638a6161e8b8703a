//! Arena allocation for syntax trees.
//!
//! Patterns, expressions and bindings are bump-allocated. A tree lives exactly
//! as long as the arena that holds it and is released with it in one step.

use bumpalo::Bump;

/// The arena that owns every node of one syntax tree.
///
/// Nodes hand out shared references into the arena, so once a node has been
/// allocated it can no longer be mutated.
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Create a new arena with the specified initial capacity in bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Allocate a value in the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Move the elements of `items` into the arena as a slice.
    #[inline]
    pub fn alloc_slice<T>(&self, items: Vec<T>) -> &[T] {
        self.bump.alloc_slice_fill_iter(items)
    }

    /// Returns the total bytes allocated in this arena.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Reset the arena, deallocating all nodes but keeping the memory.
    pub fn reset(&mut self) {
        self.bump.reset();
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}
