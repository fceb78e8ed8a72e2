//! The document tree's node payload.

use crate::arena_tree;
use crate::symbol::{BlockKind, Symbol};

/// Identifies a block within its [`DocumentTree`](crate::DocumentTree).
///
/// Ids stay valid for the lifetime of the tree, including after the block
/// has been detached.
pub type BlockId = arena_tree::Id<Block>;

pub(crate) type Arena = arena_tree::Arena<Block>;

/// A single block: its kind, the delimiter that opened it, its literal text
/// and its bookkeeping flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The kind of block.
    pub kind: BlockKind,

    /// The delimiter pair this block was recognised from, if any.
    pub symbol: Option<Symbol>,

    /// The literal text accumulated in this block.
    pub text: String,

    pub(crate) open: bool,
    pub(crate) dirty: bool,
}

impl Block {
    /// A fresh, open block with no text.
    ///
    /// New blocks are dirty: nobody has read them yet.
    pub fn new(kind: BlockKind) -> Self {
        Block {
            kind,
            symbol: None,
            text: String::new(),
            open: true,
            dirty: true,
        }
    }

    /// Whether the block may still become the cursor.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the block or one of its descendants changed since the
    /// dirty flags were last cleared.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// See [`BlockKind::is_leaf`].
    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf()
    }

    /// Seal the block. Closed blocks never reopen.
    pub(crate) fn close(&mut self) {
        self.open = false;
    }
}
