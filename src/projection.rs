//! A presentation-side table of handles keyed by block.
//!
//! The tree stores no presentation state. A renderer that keeps a visual
//! element per block holds them here and uses the dirty flags to decide
//! which ones to refresh.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::document::DocumentTree;
use crate::nodes::{Block, BlockId};

/// Handles of type `H`, one per attached block.
#[derive(Debug)]
pub struct Projection<H> {
    handles: FxHashMap<BlockId, H>,
}

impl<H> Default for Projection<H> {
    fn default() -> Self {
        Projection::new()
    }
}

impl<H> Projection<H> {
    pub fn new() -> Self {
        Projection {
            handles: FxHashMap::default(),
        }
    }

    pub fn get(&self, block: BlockId) -> Option<&H> {
        self.handles.get(&block)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Bring the handles up to date with `tree`.
    ///
    /// `render` is called, in document order, for every dirty block and for
    /// every attached block without a handle yet; it receives the block's
    /// previous handle, if any. Handles of blocks no longer attached are
    /// dropped. All dirty flags are cleared afterwards.
    ///
    /// Returns how many blocks were rendered.
    pub fn sync<F>(&mut self, tree: &mut DocumentTree, mut render: F) -> usize
    where
        F: FnMut(BlockId, &Block, Option<H>) -> H,
    {
        let mut attached = FxHashSet::default();
        let mut rendered = 0;

        for id in tree.descendants(tree.root()) {
            attached.insert(id);
            let block = tree.block(id);
            if !block.is_dirty() && self.handles.contains_key(&id) {
                continue;
            }
            let previous = self.handles.remove(&id);
            self.handles.insert(id, render(id, block, previous));
            rendered += 1;
        }

        self.handles.retain(|id, _| attached.contains(id));
        tree.clear_dirty();

        log::trace!("projection synced: {rendered} rendered, {} held", self.handles.len());
        rendered
    }
}
