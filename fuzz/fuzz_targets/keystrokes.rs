#![no_main]

use libfuzzer_sys::fuzz_target;

use markstroke::{html, xml, DocumentTree, Options};

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput<'s> {
    s: &'s str,
    opts: Options,
}

fuzz_target!(|i: FuzzInput| {
    let mut tree = DocumentTree::with_options(i.opts);
    let mut buf = [0; 4];
    for c in i.s.chars() {
        tree.add_content(c.encode_utf8(&mut buf));
        let cursor = tree.cursor();
        assert!(tree.is_attached(cursor));
        assert!(tree.block(cursor).is_open());
    }

    for id in tree.descendants(tree.root()) {
        for child in tree.children(id) {
            assert_eq!(tree.parent(child), Some(id));
        }
    }

    let typed = i.s.chars().count();
    let kept = tree.plain_text().chars().count();
    if i.opts.recognize_delimiters {
        assert!(kept <= typed);
    } else {
        assert_eq!(kept, typed);
    }

    let mut out = String::new();
    xml::format_document(&tree, &mut out).unwrap();
    out.clear();
    html::format_document(&tree, &mut out).unwrap();
});
