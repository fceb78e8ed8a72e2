use pretty_assertions::assert_eq;

use super::*;
use crate::Symbol;

#[test]
fn plain_text() {
    xml(
        "hello",
        concat!(
            "<document>\n",
            "  <normal xml:space=\"preserve\">hello</normal>\n",
            "</document>\n"
        ),
    );
}

#[test]
fn italic_span() {
    xml(
        "*abc*",
        concat!(
            "<document>\n",
            "  <italic symbol=\"*\" open=\"false\" xml:space=\"preserve\">abc</italic>\n",
            "  <normal xml:space=\"preserve\"></normal>\n",
            "</document>\n"
        ),
    );
}

#[test]
fn italic_span_fields() {
    let tree = type_keys("*abc*");
    let root = tree.root();
    let italic = tree.first_child(root).unwrap();
    let block = tree.block(italic);

    assert_eq!(block.kind, BlockKind::Italic);
    assert_eq!(block.symbol, Some(Symbol::Asterisk));
    assert_eq!(block.text, "abc");
    assert!(!block.is_open());

    let normal = tree.next_sibling(italic).unwrap();
    assert_eq!(tree.block(normal).kind, BlockKind::Normal);
    assert!(tree.block(normal).is_open());
    assert_eq!(tree.cursor(), normal);
}

#[test]
fn unmatched_delimiter_is_literal() {
    let tree = type_keys("*");
    assert_eq!(blocks(&tree, tree.root()), [(BlockKind::Normal, "*")]);

    let tree = type_keys("a `b");
    assert_eq!(blocks(&tree, tree.root()), [(BlockKind::Normal, "a `b")]);
}

#[test]
fn text_before_span_stays() {
    let tree = type_keys("a *b* c");
    assert_eq!(
        blocks(&tree, tree.root()),
        [
            (BlockKind::Normal, "a "),
            (BlockKind::Italic, "b"),
            (BlockKind::Normal, " c"),
        ]
    );
}

#[test]
fn underscore_and_backtick() {
    let tree = type_keys("_a_`b`");
    assert_eq!(
        blocks(&tree, tree.root()),
        [
            (BlockKind::Italic, "a"),
            (BlockKind::CodeInline, "b"),
            (BlockKind::Normal, ""),
        ]
    );
    let symbols: Vec<_> = tree
        .children(tree.root())
        .map(|b| tree.block(b).symbol)
        .collect();
    assert_eq!(
        symbols,
        [Some(Symbol::Underscore), Some(Symbol::Backtick), None]
    );
}

#[test]
fn empty_code_span() {
    let tree = type_keys("``");
    assert_eq!(
        blocks(&tree, tree.root()),
        [(BlockKind::CodeInline, ""), (BlockKind::Normal, "")]
    );
}

#[test]
fn emphasis_span() {
    xml(
        "**x**",
        concat!(
            "<document>\n",
            "  <emphasis symbol=\"**\" open=\"false\" xml:space=\"preserve\">x</emphasis>\n",
            "  <normal xml:space=\"preserve\"></normal>\n",
            "</document>\n"
        ),
    );

    let tree = type_keys("say __hi__!");
    assert_eq!(
        blocks(&tree, tree.root()),
        [
            (BlockKind::Normal, "say "),
            (BlockKind::Emphasis, "hi"),
            (BlockKind::Normal, "!"),
        ]
    );
}

#[test]
fn half_closed_emphasis_stays_literal() {
    let tree = type_keys("**x*y");
    assert_eq!(blocks(&tree, tree.root()), [(BlockKind::Normal, "**x*y")]);
}

#[test]
fn span_content_is_not_rescanned() {
    let tree = type_keys("*a_b*c_");
    assert_eq!(
        blocks(&tree, tree.root()),
        [(BlockKind::Italic, "a_b"), (BlockKind::Normal, "c_")]
    );
}

#[test]
fn repeated_spans() {
    let tree = type_keys("a*b*c*d*");
    assert_eq!(
        blocks(&tree, tree.root()),
        [
            (BlockKind::Normal, "a"),
            (BlockKind::Italic, "b"),
            (BlockKind::Normal, "c"),
            (BlockKind::Italic, "d"),
            (BlockKind::Normal, ""),
        ]
    );
}

#[test]
fn mixed_spans() {
    xml(
        "x *y* `z` **w**",
        concat!(
            "<document>\n",
            "  <normal xml:space=\"preserve\">x </normal>\n",
            "  <italic symbol=\"*\" open=\"false\" xml:space=\"preserve\">y</italic>\n",
            "  <normal xml:space=\"preserve\"> </normal>\n",
            "  <code_inline symbol=\"`\" open=\"false\" xml:space=\"preserve\">z</code_inline>\n",
            "  <normal xml:space=\"preserve\"> </normal>\n",
            "  <emphasis symbol=\"**\" open=\"false\" xml:space=\"preserve\">w</emphasis>\n",
            "  <normal xml:space=\"preserve\"></normal>\n",
            "</document>\n"
        ),
    );
}

#[test]
fn plain_text_round_trip() {
    for (input, expected) in [
        ("hello", "hello"),
        ("*abc*", "abc"),
        ("x *y* `z` **w**", "x y z w"),
        ("a*b*c*d*", "abcd"),
        ("*a_b*c_", "a_bc_"),
        ("**x*y", "**x*y"),
        ("*", "*"),
    ] {
        assert_eq!(type_keys(input).plain_text(), expected, "typing {:?}", input);
    }
}

#[test]
fn multibyte_text() {
    let tree = type_keys("é*ü*ñ");
    assert_eq!(
        blocks(&tree, tree.root()),
        [
            (BlockKind::Normal, "é"),
            (BlockKind::Italic, "ü"),
            (BlockKind::Normal, "ñ"),
        ]
    );
}

#[test]
fn chunk_matches_keystrokes() {
    for input in ["*abc*", "*a*b*c*", "x *y* `z` **w**", "a*b*c*d*"] {
        let mut chunked = DocumentTree::new();
        chunked.add_content(input);
        let typed = type_keys(input);
        assert_eq!(
            blocks(&chunked, chunked.root()),
            blocks(&typed, typed.root()),
            "feeding {:?}",
            input
        );
        assert_eq!(
            chunked.block(chunked.cursor()),
            typed.block(typed.cursor())
        );
        assert_eq!(
            chunked.cursor(),
            chunked.last_child(chunked.root()).unwrap()
        );
    }
}

#[test]
fn chunk_with_every_span_kind() {
    let input = "ab **c** d *e* `f` g";
    let expected = [
        (BlockKind::Normal, "ab "),
        (BlockKind::Emphasis, "c"),
        (BlockKind::Normal, " d "),
        (BlockKind::Italic, "e"),
        (BlockKind::Normal, " "),
        (BlockKind::CodeInline, "f"),
        (BlockKind::Normal, " g"),
    ];

    let typed = type_keys(input);
    assert_eq!(blocks(&typed, typed.root()), expected);

    let mut chunked = DocumentTree::new();
    chunked.add_content(input);
    assert_eq!(blocks(&chunked, chunked.root()), expected);
    assert_links(&chunked, chunked.root());
}

#[test]
fn cursor_leaves_closed_blocks() {
    let mut tree = type_keys("*a*");
    let italic = tree.first_child(tree.root()).unwrap();
    tree.set_cursor(italic);
    tree.add_content("z");

    assert_eq!(
        blocks(&tree, tree.root()),
        [
            (BlockKind::Italic, "a"),
            (BlockKind::Normal, ""),
            (BlockKind::Normal, "z"),
        ]
    );
    assert_eq!(tree.cursor(), tree.last_child(tree.root()).unwrap());
}

#[test]
fn typing_into_container() {
    let mut tree = DocumentTree::new();
    let root = tree.root();
    let quote = tree.new_block(BlockKind::Quote);
    tree.append_child(root, quote);
    tree.set_cursor(quote);

    for c in "hi *a*".chars() {
        tree.add_content(&c.to_string());
    }

    let mut out = String::new();
    crate::xml::format_document(&tree, &mut out).unwrap();
    assert_eq!(
        out,
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<document>\n",
            "  <quote>\n",
            "    <normal xml:space=\"preserve\">hi </normal>\n",
            "    <italic symbol=\"*\" open=\"false\" xml:space=\"preserve\">a</italic>\n",
            "    <normal xml:space=\"preserve\"></normal>\n",
            "  </quote>\n",
            "</document>\n"
        )
    );
    assert_links(&tree, root);
}

#[test]
fn add_data_without_recognition() {
    let mut tree = DocumentTree::new();
    let root = tree.root();
    let block = tree.new_block(BlockKind::Normal);
    tree.append_child(root, block);

    assert_eq!(tree.add_data(block, "*a*", false), block);
    assert_eq!(blocks(&tree, root), [(BlockKind::Normal, "*a*")]);
}

#[test]
fn parentless_block_keeps_delimiters_literal() {
    let mut tree = DocumentTree::new();
    let root = tree.root();

    assert_eq!(tree.add_data(root, "*a*", true), root);
    assert_eq!(tree.block(root).text, "*a*");
    assert!(tree.first_child(root).is_none());
}

#[test]
fn add_data_returns_block_after_last_split() {
    let mut tree = DocumentTree::new();
    let root = tree.root();
    let block = tree.new_block(BlockKind::Normal);
    tree.append_child(root, block);

    let last = tree.add_data(block, "x*a*y`b`", true);
    assert_eq!(tree.last_child(root), Some(last));
    assert_eq!(
        blocks(&tree, root),
        [
            (BlockKind::Normal, "x"),
            (BlockKind::Italic, "a"),
            (BlockKind::Normal, "y"),
            (BlockKind::CodeInline, "b"),
            (BlockKind::Normal, ""),
        ]
    );
}

#[test]
fn plain_text_never_grows() {
    let literal = Options {
        recognize_delimiters: false,
        ..Options::default()
    };
    for input in ["", "abc", "*a*", "**x**", "a*b_c`d", "é*ü*", "``**__"] {
        let typed = input.chars().count();
        let recognized = type_keys(input).plain_text().chars().count();
        assert!(recognized <= typed, "typing {:?}", input);
        assert_eq!(
            parse_keystrokes(input, &literal).plain_text().chars().count(),
            typed,
            "typing {:?}",
            input
        );
    }
}
