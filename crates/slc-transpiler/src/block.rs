//! block.rs — Pile des blocs ouverts.
//!
//! SL n'a pas d'accolades : chaque ouvrant (`struct`, `fun`, `if`/`while`,
//! tableau initialisé) empile un tag, et le fermant (`end` ou `]`) le dépile.
//! Le tag dépilé choisit le rendu du fermant.

use std::fmt;

/// Nature d'un bloc ouvert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockTag {
    Struct,
    Function,
    Conditional,
    Array,
}

impl BlockTag {
    /// Nom court (diagnostics / logs).
    pub fn as_str(self) -> &'static str {
        match self {
            BlockTag::Struct => "struct",
            BlockTag::Function => "function",
            BlockTag::Conditional => "cond",
            BlockTag::Array => "array",
        }
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pile LIFO des blocs ouverts, propre à une traduction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BlockStack {
    tags: Vec<BlockTag>,
}

impl BlockStack {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, tag: BlockTag) { self.tags.push(tag); }

    pub fn pop(&mut self) -> Option<BlockTag> { self.tags.pop() }

    /// Bloc le plus interne, sans le retirer.
    pub fn top(&self) -> Option<BlockTag> { self.tags.last().copied() }

    pub fn depth(&self) -> usize { self.tags.len() }

    pub fn is_empty(&self) -> bool { self.tags.is_empty() }
}
