//! The document tree: block storage, structural edits and dirty tracking.
//!
//! Text input goes through the parser (see [`DocumentTree::add_content`]);
//! the operations here are the structural primitives it is built on, also
//! available to callers that need to edit the tree directly.

use log::debug;

use crate::arena_tree::{self, Children, Descendants};
use crate::nodes::{Arena, Block, BlockId};
use crate::parser::options::Options;
use crate::symbol::BlockKind;

/// An ordered tree of blocks with a cursor marking where the next text
/// lands.
///
/// The root is always a [`BlockKind::Abstract`] block; it has no parent and
/// is never closed.
pub struct DocumentTree {
    pub(crate) arena: Arena,
    root: BlockId,
    pub(crate) cursor: BlockId,
    pub(crate) options: Options,
}

impl Default for DocumentTree {
    fn default() -> Self {
        DocumentTree::new()
    }
}

impl std::fmt::Debug for DocumentTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentTree")
            .field("root", &self.root)
            .field("cursor", &self.cursor)
            .field("blocks", &self.arena.len())
            .finish()
    }
}

impl DocumentTree {
    /// An empty document with default options.
    pub fn new() -> Self {
        DocumentTree::with_options(Options::default())
    }

    /// An empty document whose parser uses `options`.
    pub fn with_options(options: Options) -> Self {
        let mut arena = Arena::new();
        let root = arena_tree::alloc(&mut arena, Block::new(BlockKind::Abstract));
        DocumentTree {
            arena,
            root,
            cursor: root,
            options,
        }
    }

    pub fn root(&self) -> BlockId {
        self.root
    }

    /// The block the next literal text lands in.
    pub fn cursor(&self) -> BlockId {
        self.cursor
    }

    /// Move the cursor, e.g. after the caller has inserted a block of its own.
    ///
    /// Text must never be added to the root directly; moving the cursor to
    /// the root is fine since [`add_content`](Self::add_content) opens a
    /// fresh `Normal` child there.
    pub fn set_cursor(&mut self, block: BlockId) {
        self.cursor = block;
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn block(&self, block: BlockId) -> &Block {
        block.data(&self.arena)
    }

    /// Mutable access to a block's payload. Use [`mark_dirty`](Self::mark_dirty)
    /// afterwards if readers should notice the change.
    pub fn block_mut(&mut self, block: BlockId) -> &mut Block {
        block.data_mut(&mut self.arena)
    }

    pub fn parent(&self, block: BlockId) -> Option<BlockId> {
        block.parent(&self.arena)
    }

    pub fn previous_sibling(&self, block: BlockId) -> Option<BlockId> {
        block.previous_sibling(&self.arena)
    }

    pub fn next_sibling(&self, block: BlockId) -> Option<BlockId> {
        block.next_sibling(&self.arena)
    }

    pub fn first_child(&self, block: BlockId) -> Option<BlockId> {
        block.first_child(&self.arena)
    }

    pub fn last_child(&self, block: BlockId) -> Option<BlockId> {
        block.last_child(&self.arena)
    }

    /// The children of `block`, in order.
    pub fn children(&self, block: BlockId) -> Children<'_, Block> {
        block.children(&self.arena)
    }

    /// `block` and everything below it, in document order.
    pub fn descendants(&self, block: BlockId) -> Descendants<'_, Block> {
        block.descendants(&self.arena)
    }

    /// Whether `block` is the root.
    pub fn is_root(&self, block: BlockId) -> bool {
        block == self.root
    }

    /// Whether `block` is reachable from the root.
    pub fn is_attached(&self, block: BlockId) -> bool {
        block.ancestors(&self.arena).any(|b| b == self.root)
    }

    /// Allocate a detached block of the given kind.
    pub fn new_block(&mut self, kind: BlockKind) -> BlockId {
        arena_tree::alloc(&mut self.arena, Block::new(kind))
    }

    /// Make `child` the last child of `parent`.
    ///
    /// `child` must not already be attached elsewhere.
    pub fn append_child(&mut self, parent: BlockId, child: BlockId) {
        debug_assert!(child.parent(&self.arena).is_none());
        parent.append(&mut self.arena, child);
        self.mark_dirty(parent);
    }

    /// Insert `block` right after `anchor` among `parent`'s children, or in
    /// front of them all when `anchor` is `None`.
    ///
    /// Does nothing and returns `false` if `anchor` is not a child of
    /// `parent`.
    pub fn insert_after(
        &mut self,
        parent: BlockId,
        anchor: Option<BlockId>,
        block: BlockId,
    ) -> bool {
        match anchor {
            Some(anchor) if anchor.parent(&self.arena) != Some(parent) => {
                debug!("insert_after: {anchor:?} is not a child of {parent:?}");
                return false;
            }
            Some(anchor) => anchor.insert_after(&mut self.arena, block),
            None => parent.prepend(&mut self.arena, block),
        }
        self.mark_dirty(parent);
        true
    }

    /// Detach `block` from `parent`, joining its former siblings to each
    /// other.
    ///
    /// Returns `false` if `block` was not a child of `parent`. `parent` is
    /// marked dirty either way.
    pub fn remove_child(&mut self, parent: BlockId, block: BlockId) -> bool {
        let removed = block.parent(&self.arena) == Some(parent);
        if removed {
            block.detach(&mut self.arena);
        } else {
            debug!("remove_child: {block:?} is not a child of {parent:?}");
        }
        self.mark_dirty(parent);
        removed
    }

    /// Flag `block` and all of its ancestors as changed.
    pub fn mark_dirty(&mut self, block: BlockId) {
        let mut next = Some(block);
        while let Some(b) = next {
            let node = b.data_mut(&mut self.arena);
            node.dirty = true;
            next = b.parent(&self.arena);
        }
    }

    /// The attached dirty blocks, in document order.
    pub fn dirty_blocks(&self) -> Vec<BlockId> {
        self.descendants(self.root)
            .filter(|&b| self.block(b).dirty)
            .collect()
    }

    /// Reset the dirty flag on every attached block.
    pub fn clear_dirty(&mut self) {
        let dirty = self.dirty_blocks();
        for b in dirty {
            b.data_mut(&mut self.arena).dirty = false;
        }
    }

    /// The text of every block in document order, with a newline per break.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for b in self.descendants(self.root) {
            let block = self.block(b);
            match block.kind {
                BlockKind::Break => text.push('\n'),
                _ => text.push_str(&block.text),
            }
        }
        text
    }
}
