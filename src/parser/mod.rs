//! Feeding text into a [`DocumentTree`].
//!
//! Text arrives a keystroke (or a short chunk) at a time. Each character is
//! appended to the cursor block until a delimiter closes a pair opened
//! earlier in the same block; the block is then split three ways into the
//! text before the opener, a sealed block for the delimited span, and a
//! fresh `Normal` block that receives the rest of the input.

mod inlines;
pub mod options;

use log::{debug, trace, warn};

use crate::document::DocumentTree;
use crate::nodes::BlockId;
use crate::symbol::{BlockKind, Symbol};

impl DocumentTree {
    /// Feed text typed at the cursor.
    ///
    /// Closed cursors are left for their nearest open ancestor first. Leaf
    /// cursors receive the text directly; any other cursor gets a new
    /// `Normal` child to hold it. The cursor ends up on the block the next
    /// text should land in.
    pub fn add_content(&mut self, text: &str) {
        trace!("add_content {text:?}");

        if !self.options.hardbreaks {
            self.add_line(text);
            return;
        }

        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.insert_break();
            }
            if !line.is_empty() {
                self.add_line(line);
            }
        }
    }

    fn add_line(&mut self, text: &str) {
        self.settle_cursor();

        let cursor = self.cursor;
        if self.block(cursor).is_leaf() {
            self.cursor = self.add_data(cursor, text, self.options.recognize_delimiters);
        } else {
            let block = self.new_block(BlockKind::Normal);
            self.append_child(cursor, block);
            self.cursor = self.add_data(block, text, self.options.recognize_delimiters);
        }
    }

    /// Walk the cursor up past closed blocks.
    fn settle_cursor(&mut self) {
        while !self.block(self.cursor).is_open() {
            match self.parent(self.cursor) {
                Some(parent) => self.cursor = parent,
                None => break,
            }
        }
    }

    /// Append `text` to `block`, splitting off a new block for each closed
    /// delimiter pair when `recognize` is set.
    ///
    /// Returns the block that should become the cursor: `block` itself if no
    /// pair closed, otherwise the `Normal` block after the last split.
    ///
    /// Splitting needs a parent. If `block` has none, the text is appended
    /// literally.
    pub fn add_data(&mut self, block: BlockId, text: &str, recognize: bool) -> BlockId {
        if !recognize {
            self.push_text(block, text);
            return block;
        }

        let mut current = block;
        let mut rest = text;
        'split: loop {
            for (i, c) in rest.char_indices() {
                if let Some(symbol) = Symbol::from_char(c) {
                    let after = &rest[i + c.len_utf8()..];
                    if let Some(next) = self.close_span(current, c, symbol) {
                        current = next;
                        rest = after;
                        continue 'split;
                    }
                }
                self.push_char(current, c);
            }
            return current;
        }
    }

    /// Close the span `c` completes in `block`, if any, returning the new
    /// `Normal` block that follows it.
    fn close_span(&mut self, block: BlockId, c: char, symbol: Symbol) -> Option<BlockId> {
        let span = inlines::scan_closer(&self.block(block).text, c, symbol, &self.options)?;

        let Some(parent) = self.parent(block) else {
            warn!("delimiter {symbol} closed in parentless block {block:?}; kept literally");
            return None;
        };

        let (head, content) = {
            let text = &self.block(block).text;
            (
                text[..span.opener].to_string(),
                text[span.content.clone()].to_string(),
            )
        };
        debug!(
            "{:?} span {content:?} closed in {block:?}",
            BlockKind::from_symbol(span.symbol)
        );
        self.block_mut(block).text = head;
        self.mark_dirty(block);

        let delimited = self.new_block(BlockKind::from_symbol(span.symbol));
        self.insert_after(parent, Some(block), delimited);
        self.add_data(delimited, &content, false);
        let node = self.block_mut(delimited);
        node.symbol = Some(span.symbol);
        node.close();

        let normal = self.new_block(BlockKind::Normal);
        self.insert_after(parent, Some(delimited), normal);

        if self.block(block).text.is_empty() {
            self.remove_child(parent, block);
        }

        Some(normal)
    }

    fn push_text(&mut self, block: BlockId, text: &str) {
        if text.is_empty() {
            return;
        }
        self.block_mut(block).text.push_str(text);
        self.mark_dirty(block);
    }

    fn push_char(&mut self, block: BlockId, c: char) {
        self.block_mut(block).text.push(c);
        self.mark_dirty(block);
    }

    /// Insert a hard line break after the cursor and move the cursor to a
    /// fresh `Normal` block after it.
    pub fn insert_break(&mut self) {
        self.settle_cursor();

        let cursor = self.cursor;
        let br = self.new_block(BlockKind::Break);
        self.block_mut(br).close();
        let normal = self.new_block(BlockKind::Normal);

        match self.parent(cursor) {
            Some(parent) => {
                self.insert_after(parent, Some(cursor), br);
                self.insert_after(parent, Some(br), normal);
            }
            None => {
                self.append_child(cursor, br);
                self.append_child(cursor, normal);
            }
        }
        debug!("break {br:?} inserted after {cursor:?}");
        self.cursor = normal;
    }

    /// Delete the last character of the cursor block, returning it.
    ///
    /// Does nothing at the root or in an empty block.
    pub fn backspace(&mut self) -> Option<char> {
        let cursor = self.cursor;
        if self.is_root(cursor) {
            return None;
        }
        let c = self.block_mut(cursor).text.pop()?;
        self.mark_dirty(cursor);
        Some(c)
    }
}
