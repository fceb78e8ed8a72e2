//! Configuration for the keystroke parser.

#[cfg(feature = "bon")]
use bon::Builder;

/// Options controlling how incoming text is turned into blocks.
///
/// ```rust
/// # use markstroke::{DocumentTree, Options};
/// let mut options = Options::default();
/// options.strong_runs = false;
/// let mut tree = DocumentTree::with_options(options);
/// for c in "**x**".chars() {
///     tree.add_content(&c.to_string());
/// }
/// assert_eq!(tree.plain_text(), "x");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Options {
    /// Recognise delimiter pairs at all. When off, every character is
    /// literal text.
    ///
    /// ```rust
    /// # use markstroke::{DocumentTree, Options};
    /// let mut options = Options::default();
    /// options.recognize_delimiters = false;
    /// let mut tree = DocumentTree::with_options(options);
    /// tree.add_content("*a*");
    /// assert_eq!(tree.plain_text(), "*a*");
    /// ```
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub recognize_delimiters: bool,

    /// Recognise doubled delimiters (`**`, `__`) as emphasis. When off, a
    /// doubled delimiter reads as two single ones: `**` is an empty italic
    /// span.
    ///
    /// ```rust
    /// # use markstroke::{BlockKind, DocumentTree};
    /// let mut tree = DocumentTree::new();
    /// for c in "**x**".chars() {
    ///     tree.add_content(&c.to_string());
    /// }
    /// let kinds: Vec<_> = tree
    ///     .children(tree.root())
    ///     .map(|b| tree.block(b).kind)
    ///     .collect();
    /// assert_eq!(kinds, [BlockKind::Emphasis, BlockKind::Normal]);
    /// ```
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub strong_runs: bool,

    /// Treat `'\n'` in the input as a hard line break, as if
    /// [`insert_break`](crate::DocumentTree::insert_break) had been called.
    ///
    /// ```rust
    /// # use markstroke::{BlockKind, DocumentTree, Options};
    /// let mut options = Options::default();
    /// options.hardbreaks = true;
    /// let mut tree = DocumentTree::with_options(options);
    /// tree.add_content("a\nb");
    /// let kinds: Vec<_> = tree
    ///     .children(tree.root())
    ///     .map(|b| tree.block(b).kind)
    ///     .collect();
    /// assert_eq!(kinds, [BlockKind::Normal, BlockKind::Break, BlockKind::Normal]);
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub hardbreaks: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            recognize_delimiters: true,
            strong_runs: true,
            hardbreaks: false,
        }
    }
}
