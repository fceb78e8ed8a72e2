//! The delimiter vocabulary and the block kinds it produces.

use std::fmt;

use phf::phf_map;

/// A markup delimiter which, matched in pairs, reclassifies the text it
/// encloses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum::VariantArray))]
pub enum Symbol {
    /// `` ` ``
    Backtick,
    /// `*`
    Asterisk,
    /// `_`
    Underscore,
    /// `**`
    DoubleAsterisk,
    /// `__`
    DoubleUnderscore,
    /// ```` ``` ````; recognised by [`Symbol::from_text`] but never produced by
    /// the keystroke scanner.
    TripleBacktick,
}

static SYMBOLS: phf::Map<&'static str, Symbol> = phf_map! {
    "`" => Symbol::Backtick,
    "*" => Symbol::Asterisk,
    "_" => Symbol::Underscore,
    "**" => Symbol::DoubleAsterisk,
    "__" => Symbol::DoubleUnderscore,
    "```" => Symbol::TripleBacktick,
};

impl Symbol {
    /// Exact, case-sensitive lookup of a delimiter by its literal text.
    ///
    /// ```
    /// # use markstroke::Symbol;
    /// assert_eq!(Symbol::from_text("**"), Some(Symbol::DoubleAsterisk));
    /// assert_eq!(Symbol::from_text("***"), None);
    /// ```
    pub fn from_text(text: &str) -> Option<Symbol> {
        SYMBOLS.get(text).copied()
    }

    /// The single-character delimiter `c` forms, if any.
    pub fn from_char(c: char) -> Option<Symbol> {
        let mut buf = [0; 4];
        Symbol::from_text(c.encode_utf8(&mut buf))
    }

    /// The literal text of the delimiter.
    pub fn text(self) -> &'static str {
        match self {
            Symbol::Backtick => "`",
            Symbol::Asterisk => "*",
            Symbol::Underscore => "_",
            Symbol::DoubleAsterisk => "**",
            Symbol::DoubleUnderscore => "__",
            Symbol::TripleBacktick => "```",
        }
    }

    /// The delimiter written as this one twice over, if that is a delimiter
    /// in its own right.
    pub fn doubled(self) -> Option<Symbol> {
        match self {
            Symbol::Asterisk => Some(Symbol::DoubleAsterisk),
            Symbol::Underscore => Some(Symbol::DoubleUnderscore),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// The semantic category of a node in a document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum::VariantArray))]
pub enum BlockKind {
    /// Strong emphasis, from `**` or `__`.
    Emphasis,
    /// From `*` or `_`.
    Italic,
    Quote,
    /// Inline code, from `` ` ``.
    CodeInline,
    CodeBlock,
    /// Plain text.
    Normal,
    /// The root of every document.
    Abstract,
    /// A hard line break.
    Break,
}

impl BlockKind {
    /// The kind of block a delimiter pair produces.
    pub fn from_symbol(symbol: Symbol) -> BlockKind {
        match symbol {
            Symbol::Asterisk | Symbol::Underscore => BlockKind::Italic,
            Symbol::Backtick => BlockKind::CodeInline,
            Symbol::DoubleAsterisk | Symbol::DoubleUnderscore => BlockKind::Emphasis,
            _ => BlockKind::Normal,
        }
    }

    /// Leaf kinds take literal text directly; any other kind gets a fresh
    /// `Normal` child when it is the cursor and text arrives.
    pub fn is_leaf(self) -> bool {
        matches!(self, BlockKind::Normal | BlockKind::CodeInline)
    }

    pub(crate) fn xml_node_name(self) -> &'static str {
        match self {
            BlockKind::Emphasis => "emphasis",
            BlockKind::Italic => "italic",
            BlockKind::Quote => "quote",
            BlockKind::CodeInline => "code_inline",
            BlockKind::CodeBlock => "code_block",
            BlockKind::Normal => "normal",
            BlockKind::Abstract => "document",
            BlockKind::Break => "break",
        }
    }
}

/// The kind for an optional delimiter; no delimiter means plain text.
impl From<Option<Symbol>> for BlockKind {
    fn from(symbol: Option<Symbol>) -> Self {
        symbol.map_or(BlockKind::Normal, BlockKind::from_symbol)
    }
}
