//! Text helpers shared by the projections.

use std::fmt::{self, Write};

macro_rules! character_set {
    () => {{
        [false; 256]
    }};

    ($value:literal $(,$rest:literal)*) => {{
        const A: &[u8] = $value;
        let mut a = character_set!($($rest),*);
        let mut i = 0;
        while i < A.len() {
            a[A[i] as usize] = true;
            i += 1;
        }
        a
    }}
}

const MARKUP_UNSAFE: [bool; 256] = character_set!(b"&<>\"\0");

/// Write `buffer` with the characters special to XML and HTML escaped.
pub(crate) fn escape(output: &mut dyn Write, buffer: &str) -> fmt::Result {
    let bytes = buffer.as_bytes();
    let mut offset = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if !MARKUP_UNSAFE[byte as usize] {
            continue;
        }
        let esc = match byte {
            b'"' => "&quot;",
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            _ => "\u{fffd}",
        };
        output.write_str(&buffer[offset..i])?;
        output.write_str(esc)?;
        offset = i + 1;
    }
    output.write_str(&buffer[offset..])
}
