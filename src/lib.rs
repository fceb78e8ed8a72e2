//! An incremental, keystroke-driven inline markup tree builder.
//!
//! Characters are fed into a [`DocumentTree`] as they are typed. Each one
//! lands in the cursor block; when a delimiter closes a pair opened earlier
//! in that block, the enclosed text is split off into a sealed block of the
//! matching kind and typing continues in a fresh plain block after it.
//!
//! ```
//! use markstroke::{BlockKind, DocumentTree, Symbol};
//!
//! let mut tree = DocumentTree::new();
//! for c in "*abc*".chars() {
//!     tree.add_content(&c.to_string());
//! }
//!
//! let blocks: Vec<_> = tree.children(tree.root()).map(|b| tree.block(b)).collect();
//! assert_eq!(blocks.len(), 2);
//! assert_eq!(blocks[0].kind, BlockKind::Italic);
//! assert_eq!(blocks[0].symbol, Some(Symbol::Asterisk));
//! assert_eq!(blocks[0].text, "abc");
//! assert!(!blocks[0].is_open());
//! assert_eq!(blocks[1].kind, BlockKind::Normal);
//! assert_eq!(tree.cursor(), tree.last_child(tree.root()).unwrap());
//! ```
//!
//! Trees are read back through [`DocumentTree::children`] and friends, or
//! projected with [`xml`] and [`html`]. A renderer keeping one element per
//! block can use [`Projection`] to refresh only what changed.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod arena_tree;
mod document;
pub mod html;
pub mod nodes;
mod parser;
mod projection;
mod strings;
mod symbol;
pub mod xml;

pub use document::DocumentTree;
pub use nodes::{Block, BlockId};
pub use parser::options::Options;
pub use projection::Projection;
pub use symbol::{BlockKind, Symbol};

#[cfg(feature = "bon")]
pub use parser::options::OptionsBuilder;

/// Build a tree by typing `input` one character at a time.
pub fn parse_keystrokes(input: &str, options: &Options) -> DocumentTree {
    let mut tree = DocumentTree::with_options(*options);
    let mut buf = [0; 4];
    for c in input.chars() {
        tree.add_content(c.encode_utf8(&mut buf));
    }
    tree
}

/// Type `input` one character at a time and render the tree as XML.
pub fn keystrokes_to_xml(input: &str, options: &Options) -> String {
    let tree = parse_keystrokes(input, options);
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = xml::format_document(&tree, &mut out);
    out
}

/// Type `input` one character at a time and render the tree as HTML.
pub fn keystrokes_to_html(input: &str, options: &Options) -> String {
    let tree = parse_keystrokes(input, options);
    let mut out = String::new();
    let _ = html::format_document(&tree, &mut out);
    out
}
