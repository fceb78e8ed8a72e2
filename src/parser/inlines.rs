//! Recognition of delimiter pairs in a block's accumulated text.
//!
//! The scanner only looks at the text already held by a block and the
//! delimiter character arriving next; it never touches the tree.

use std::ops::Range;

use crate::parser::options::Options;
use crate::symbol::Symbol;

/// A closed delimiter pair found in a block's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Span {
    /// The delimiter the pair is made of.
    pub symbol: Symbol,
    /// Byte offset of the opening delimiter; the block keeps `text[..opener]`.
    pub opener: usize,
    /// Bytes of text between the opener and the closer.
    pub content: Range<usize>,
}

/// Decide what delimiter character `c` (forming `symbol`) does when it
/// arrives after `text`: close a span, or nothing, in which case it is
/// appended literally.
///
/// A span always pairs with the *first* occurrence of `c` still in `text`.
pub(crate) fn scan_closer(text: &str, c: char, symbol: Symbol, options: &Options) -> Option<Span> {
    let opener = text.find(c)?;
    let width = c.len_utf8();

    let doubled = if options.strong_runs {
        symbol.doubled()
    } else {
        None
    };

    let Some(doubled) = doubled else {
        return Some(Span {
            symbol,
            opener,
            content: opener + width..text.len(),
        });
    };

    let after_opener = &text[opener + width..];
    if after_opener.starts_with(c) {
        // Double opener: wait for the first half of the closer to be in
        // `text` and require something in between.
        let start = opener + 2 * width;
        let end = text.len().saturating_sub(width);
        if text.ends_with(c) && end > start {
            return Some(Span {
                symbol: doubled,
                opener,
                content: start..end,
            });
        }
        None
    } else if after_opener.is_empty() {
        // `c` directly follows its own opener; it grows into a double one.
        None
    } else {
        Some(Span {
            symbol,
            opener,
            content: opener + width..text.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str, c: char) -> Option<Span> {
        let symbol = Symbol::from_char(c).expect("delimiter");
        scan_closer(text, c, symbol, &Options::default())
    }

    fn scan_single(text: &str, c: char) -> Option<Span> {
        let symbol = Symbol::from_char(c).expect("delimiter");
        let options = Options {
            strong_runs: false,
            ..Options::default()
        };
        scan_closer(text, c, symbol, &options)
    }

    #[test]
    fn no_opener() {
        assert_eq!(scan("abc", '*'), None);
        assert_eq!(scan("a_c", '*'), None);
        assert_eq!(scan("", '`'), None);
    }

    #[test]
    fn single_pair() {
        assert_eq!(
            scan("x*abc", '*'),
            Some(Span {
                symbol: Symbol::Asterisk,
                opener: 1,
                content: 2..5,
            })
        );
    }

    #[test]
    fn first_occurrence_wins() {
        assert_eq!(
            scan_single("`a`b", '`'),
            Some(Span {
                symbol: Symbol::Backtick,
                opener: 0,
                content: 1..4,
            })
        );
    }

    #[test]
    fn adjacent_opener_grows() {
        assert_eq!(scan("*", '*'), None);
        assert_eq!(scan("ab_", '_'), None);
    }

    #[test]
    fn adjacent_opener_without_doubling() {
        assert_eq!(
            scan_single("*", '*'),
            Some(Span {
                symbol: Symbol::Asterisk,
                opener: 0,
                content: 1..1,
            })
        );
    }

    #[test]
    fn backtick_never_doubles() {
        assert_eq!(
            scan("`", '`'),
            Some(Span {
                symbol: Symbol::Backtick,
                opener: 0,
                content: 1..1,
            })
        );
    }

    #[test]
    fn double_pair() {
        assert_eq!(scan("**x", '*'), None);
        assert_eq!(
            scan("**x*", '*'),
            Some(Span {
                symbol: Symbol::DoubleAsterisk,
                opener: 0,
                content: 2..3,
            })
        );
        assert_eq!(
            scan("a__bc_", '_'),
            Some(Span {
                symbol: Symbol::DoubleUnderscore,
                opener: 1,
                content: 3..5,
            })
        );
    }

    #[test]
    fn double_pair_needs_content() {
        assert_eq!(scan("**", '*'), None);
        assert_eq!(scan("***", '*'), None);
    }
}
