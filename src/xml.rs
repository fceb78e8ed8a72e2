//! An XML dump of a document tree, for inspection and tests.

use std::cmp;
use std::fmt::{self, Write};

use crate::document::DocumentTree;
use crate::nodes::BlockId;
use crate::strings::escape;
use crate::symbol::BlockKind;

const MAX_INDENT: u32 = 40;

/// Formats a document tree as XML.
///
/// Each block becomes an element named after its kind. Text-bearing blocks
/// without children hold their text as content; a `symbol` attribute holds
/// the delimiter a block came from, and closed blocks carry `open="false"`.
pub fn format_document(tree: &DocumentTree, output: &mut dyn Write) -> fmt::Result {
    output.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n")?;
    XmlFormatter::new(tree, output).format(tree.root())
}

struct XmlFormatter<'o> {
    tree: &'o DocumentTree,
    output: &'o mut dyn Write,
    indent: u32,
}

impl<'o> XmlFormatter<'o> {
    fn new(tree: &'o DocumentTree, output: &'o mut dyn Write) -> Self {
        XmlFormatter {
            tree,
            output,
            indent: 0,
        }
    }

    fn format(&mut self, root: BlockId) -> fmt::Result {
        // Iterative traversal with a work stack: render the opening tag,
        // push the node back for its closing tag, then its children in
        // reverse so the first child is rendered next.
        enum Phase {
            Pre,
            Post,
        }
        let mut stack = vec![(root, Phase::Pre)];

        while let Some((node, phase)) = stack.pop() {
            match phase {
                Phase::Pre => {
                    stack.push((node, Phase::Post));
                    self.format_node(node, true)?;
                    for child in node.reverse_children(&self.tree.arena) {
                        stack.push((child, Phase::Pre));
                    }
                }
                Phase::Post => self.format_node(node, false)?,
            }
        }

        Ok(())
    }

    fn indent(&mut self) -> fmt::Result {
        for _ in 0..(cmp::min(self.indent, MAX_INDENT)) {
            self.output.write_str(" ")?;
        }
        Ok(())
    }

    fn format_node(&mut self, node: BlockId, entering: bool) -> fmt::Result {
        let tree = self.tree;
        let block = tree.block(node);
        let name = block.kind.xml_node_name();
        let has_children = tree.first_child(node).is_some();
        let holds_text = !matches!(block.kind, BlockKind::Abstract | BlockKind::Break);

        if !entering {
            if has_children {
                self.indent -= 2;
                self.indent()?;
                writeln!(self.output, "</{}>", name)?;
            }
            return Ok(());
        }

        self.indent()?;
        write!(self.output, "<{}", name)?;

        if let Some(symbol) = block.symbol {
            self.output.write_str(" symbol=\"")?;
            escape(self.output, symbol.text())?;
            self.output.write_str("\"")?;
        }
        if !block.is_open() && block.kind != BlockKind::Break {
            self.output.write_str(" open=\"false\"")?;
        }

        if has_children {
            if holds_text && !block.text.is_empty() {
                self.output.write_str(" text=\"")?;
                escape(self.output, &block.text)?;
                self.output.write_str("\"")?;
            }
            self.indent += 2;
            self.output.write_str(">\n")
        } else if holds_text {
            self.output.write_str(" xml:space=\"preserve\">")?;
            escape(self.output, &block.text)?;
            writeln!(self.output, "</{}>", name)
        } else {
            self.output.write_str(" />\n")
        }
    }
}
