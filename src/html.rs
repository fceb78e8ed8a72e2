//! Inline HTML projection of a document tree.

use std::fmt::{self, Write};

use crate::document::DocumentTree;
use crate::nodes::BlockId;
use crate::strings::escape;
use crate::symbol::BlockKind;

/// Formats a document tree as inline HTML.
///
/// Every block is rendered, including empty ones, so an editor can keep an
/// element for the cursor to sit in. The delimiter a block was recognised
/// from is kept in a `data-decorator` attribute.
///
/// ```rust
/// # use markstroke::{html, DocumentTree};
/// let mut tree = DocumentTree::new();
/// for c in "a *b*".chars() {
///     tree.add_content(&c.to_string());
/// }
/// let mut out = String::new();
/// html::format_document(&tree, &mut out).unwrap();
/// assert_eq!(out, "<span>a </span><i data-decorator=\"*\">b</i><span></span>\n");
/// ```
pub fn format_document(tree: &DocumentTree, output: &mut dyn Write) -> fmt::Result {
    let root = tree.root();
    let mut f = HtmlFormatter { tree, output };
    for child in tree.children(root) {
        f.format(child)?;
    }
    if tree.first_child(root).is_some() {
        f.output.write_str("\n")?;
    }
    Ok(())
}

struct HtmlFormatter<'o> {
    tree: &'o DocumentTree,
    output: &'o mut dyn Write,
}

fn tag_name(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Emphasis => "b",
        BlockKind::Italic => "i",
        BlockKind::Quote => "blockquote",
        BlockKind::CodeInline => "code",
        BlockKind::CodeBlock => "pre",
        BlockKind::Break => "br",
        BlockKind::Normal | BlockKind::Abstract => "span",
    }
}

impl<'o> HtmlFormatter<'o> {
    fn format(&mut self, node: BlockId) -> fmt::Result {
        let tree = self.tree;
        let block = tree.block(node);
        let tag = tag_name(block.kind);

        if block.kind == BlockKind::Break {
            return self.output.write_str("<br />");
        }

        write!(self.output, "<{}", tag)?;
        if let Some(symbol) = block.symbol {
            self.output.write_str(" data-decorator=\"")?;
            escape(self.output, symbol.text())?;
            self.output.write_str("\"")?;
        }
        self.output.write_str(">")?;
        escape(self.output, &block.text)?;
        for child in tree.children(node) {
            self.format(child)?;
        }
        write!(self.output, "</{}>", tag)
    }
}
