//! 8x8 column-pattern font
//!
//! Each glyph is eight pixel columns, one byte per column with bit 0 as the
//! top pixel. The basic table covers printable ASCII; a small extended table
//! adds the German umlauts, sharp s, the euro sign and the degree sign.
//! Lookup is total: anything else renders as a filled box.

/// Pixel columns per glyph
pub const GLYPH_COLS: usize = 8;

/// One character cell as pixel columns, bit 0 = top pixel
pub type Glyph = [u8; GLYPH_COLS];

/// Glyph shown for codepoints the font does not cover
pub static PLACEHOLDER: Glyph = [0x00, 0xFF, 0x81, 0x81, 0x81, 0xFF, 0x00, 0x00];

/// First codepoint covered by [`BASIC_FONT`]
const BASIC_FONT_START: u32 = 32;

/// Look up the glyph for a character
///
/// Resolution order: the extended table, then the printable ASCII range by
/// index, then [`PLACEHOLDER`]. Never fails.
pub fn glyph_for(c: char) -> &'static Glyph {
    if let Some(glyph) = extended_glyph(c) {
        return glyph;
    }
    let code = c as u32;
    if (BASIC_FONT_START..BASIC_FONT_START + BASIC_FONT.len() as u32).contains(&code) {
        &BASIC_FONT[(code - BASIC_FONT_START) as usize]
    } else {
        &PLACEHOLDER
    }
}

fn extended_glyph(c: char) -> Option<&'static Glyph> {
    EXTENDED_FONT
        .iter()
        .find(|(extended, _)| *extended == c)
        .map(|(_, glyph)| glyph)
}

/// Printable ASCII glyphs, indexed by `codepoint - 32`
///
/// Entry 95 (DEL) has no printable shape and carries the filled box.
pub static BASIC_FONT: [Glyph; 96] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00, 0x00, 0x00, 0x00], // '!'
    [0x00, 0x00, 0x07, 0x00, 0x07, 0x00, 0x00, 0x00], // '"'
    [0x00, 0x14, 0x7F, 0x14, 0x7F, 0x14, 0x00, 0x00], // '#'
    [0x00, 0x24, 0x2A, 0x7F, 0x2A, 0x12, 0x00, 0x00], // '$'
    [0x00, 0x23, 0x13, 0x08, 0x64, 0x62, 0x00, 0x00], // '%'
    [0x00, 0x36, 0x49, 0x55, 0x22, 0x50, 0x00, 0x00], // '&'
    [0x00, 0x00, 0x05, 0x03, 0x00, 0x00, 0x00, 0x00], // '\''
    [0x00, 0x1C, 0x22, 0x41, 0x00, 0x00, 0x00, 0x00], // '('
    [0x00, 0x41, 0x22, 0x1C, 0x00, 0x00, 0x00, 0x00], // ')'
    [0x00, 0x08, 0x2A, 0x1C, 0x2A, 0x08, 0x00, 0x00], // '*'
    [0x00, 0x08, 0x08, 0x3E, 0x08, 0x08, 0x00, 0x00], // '+'
    [0x00, 0xA0, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00], // ','
    [0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00], // '-'
    [0x00, 0x60, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00], // '.'
    [0x00, 0x20, 0x10, 0x08, 0x04, 0x02, 0x00, 0x00], // '/'
    [0x00, 0x3E, 0x51, 0x49, 0x45, 0x3E, 0x00, 0x00], // '0'
    [0x00, 0x00, 0x42, 0x7F, 0x40, 0x00, 0x00, 0x00], // '1'
    [0x00, 0x62, 0x51, 0x49, 0x49, 0x46, 0x00, 0x00], // '2'
    [0x00, 0x22, 0x41, 0x49, 0x49, 0x36, 0x00, 0x00], // '3'
    [0x00, 0x18, 0x14, 0x12, 0x7F, 0x10, 0x00, 0x00], // '4'
    [0x00, 0x27, 0x45, 0x45, 0x45, 0x39, 0x00, 0x00], // '5'
    [0x00, 0x3C, 0x4A, 0x49, 0x49, 0x30, 0x00, 0x00], // '6'
    [0x00, 0x01, 0x71, 0x09, 0x05, 0x03, 0x00, 0x00], // '7'
    [0x00, 0x36, 0x49, 0x49, 0x49, 0x36, 0x00, 0x00], // '8'
    [0x00, 0x06, 0x49, 0x49, 0x29, 0x1E, 0x00, 0x00], // '9'
    [0x00, 0x00, 0x36, 0x36, 0x00, 0x00, 0x00, 0x00], // ':'
    [0x00, 0x00, 0xAC, 0x6C, 0x00, 0x00, 0x00, 0x00], // ';'
    [0x00, 0x08, 0x14, 0x22, 0x41, 0x00, 0x00, 0x00], // '<'
    [0x00, 0x14, 0x14, 0x14, 0x14, 0x14, 0x00, 0x00], // '='
    [0x00, 0x41, 0x22, 0x14, 0x08, 0x00, 0x00, 0x00], // '>'
    [0x00, 0x02, 0x01, 0x51, 0x09, 0x06, 0x00, 0x00], // '?'
    [0x00, 0x32, 0x49, 0x79, 0x41, 0x3E, 0x00, 0x00], // '@'
    [0x00, 0x7E, 0x09, 0x09, 0x09, 0x7E, 0x00, 0x00], // 'A'
    [0x00, 0x7F, 0x49, 0x49, 0x49, 0x36, 0x00, 0x00], // 'B'
    [0x00, 0x3E, 0x41, 0x41, 0x41, 0x22, 0x00, 0x00], // 'C'
    [0x00, 0x7F, 0x41, 0x41, 0x22, 0x1C, 0x00, 0x00], // 'D'
    [0x00, 0x7F, 0x49, 0x49, 0x49, 0x41, 0x00, 0x00], // 'E'
    [0x00, 0x7F, 0x09, 0x09, 0x09, 0x01, 0x00, 0x00], // 'F'
    [0x00, 0x3E, 0x41, 0x41, 0x51, 0x72, 0x00, 0x00], // 'G'
    [0x00, 0x7F, 0x08, 0x08, 0x08, 0x7F, 0x00, 0x00], // 'H'
    [0x00, 0x41, 0x7F, 0x41, 0x00, 0x00, 0x00, 0x00], // 'I'
    [0x00, 0x20, 0x40, 0x41, 0x3F, 0x01, 0x00, 0x00], // 'J'
    [0x00, 0x7F, 0x08, 0x14, 0x22, 0x41, 0x00, 0x00], // 'K'
    [0x00, 0x7F, 0x40, 0x40, 0x40, 0x40, 0x00, 0x00], // 'L'
    [0x00, 0x7F, 0x02, 0x0C, 0x02, 0x7F, 0x00, 0x00], // 'M'
    [0x00, 0x7F, 0x04, 0x08, 0x10, 0x7F, 0x00, 0x00], // 'N'
    [0x00, 0x3E, 0x41, 0x41, 0x41, 0x3E, 0x00, 0x00], // 'O'
    [0x00, 0x7F, 0x09, 0x09, 0x09, 0x06, 0x00, 0x00], // 'P'
    [0x00, 0x3E, 0x41, 0x51, 0x21, 0x5E, 0x00, 0x00], // 'Q'
    [0x00, 0x7F, 0x09, 0x19, 0x29, 0x46, 0x00, 0x00], // 'R'
    [0x00, 0x26, 0x49, 0x49, 0x49, 0x32, 0x00, 0x00], // 'S'
    [0x00, 0x01, 0x01, 0x7F, 0x01, 0x01, 0x00, 0x00], // 'T'
    [0x00, 0x3F, 0x40, 0x40, 0x40, 0x3F, 0x00, 0x00], // 'U'
    [0x00, 0x1F, 0x20, 0x40, 0x20, 0x1F, 0x00, 0x00], // 'V'
    [0x00, 0x3F, 0x40, 0x38, 0x40, 0x3F, 0x00, 0x00], // 'W'
    [0x00, 0x63, 0x14, 0x08, 0x14, 0x63, 0x00, 0x00], // 'X'
    [0x00, 0x03, 0x04, 0x78, 0x04, 0x03, 0x00, 0x00], // 'Y'
    [0x00, 0x61, 0x51, 0x49, 0x45, 0x43, 0x00, 0x00], // 'Z'
    [0x00, 0x7F, 0x41, 0x41, 0x00, 0x00, 0x00, 0x00], // '['
    [0x00, 0x02, 0x04, 0x08, 0x10, 0x20, 0x00, 0x00], // '\\'
    [0x00, 0x41, 0x41, 0x7F, 0x00, 0x00, 0x00, 0x00], // ']'
    [0x00, 0x04, 0x02, 0x01, 0x02, 0x04, 0x00, 0x00], // '^'
    [0x00, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00], // '_'
    [0x00, 0x01, 0x02, 0x04, 0x00, 0x00, 0x00, 0x00], // '`'
    [0x00, 0x20, 0x54, 0x54, 0x54, 0x78, 0x00, 0x00], // 'a'
    [0x00, 0x7F, 0x48, 0x44, 0x44, 0x38, 0x00, 0x00], // 'b'
    [0x00, 0x38, 0x44, 0x44, 0x28, 0x00, 0x00, 0x00], // 'c'
    [0x00, 0x38, 0x44, 0x44, 0x48, 0x7F, 0x00, 0x00], // 'd'
    [0x00, 0x38, 0x54, 0x54, 0x54, 0x18, 0x00, 0x00], // 'e'
    [0x00, 0x08, 0x7E, 0x09, 0x02, 0x00, 0x00, 0x00], // 'f'
    [0x00, 0x18, 0xA4, 0xA4, 0xA4, 0x7C, 0x00, 0x00], // 'g'
    [0x00, 0x7F, 0x08, 0x04, 0x04, 0x78, 0x00, 0x00], // 'h'
    [0x00, 0x00, 0x7D, 0x00, 0x00, 0x00, 0x00, 0x00], // 'i'
    [0x00, 0x80, 0x84, 0x7D, 0x00, 0x00, 0x00, 0x00], // 'j'
    [0x00, 0x7F, 0x10, 0x28, 0x44, 0x00, 0x00, 0x00], // 'k'
    [0x00, 0x41, 0x7F, 0x40, 0x00, 0x00, 0x00, 0x00], // 'l'
    [0x00, 0x7C, 0x04, 0x18, 0x04, 0x78, 0x00, 0x00], // 'm'
    [0x00, 0x7C, 0x08, 0x04, 0x7C, 0x00, 0x00, 0x00], // 'n'
    [0x00, 0x38, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00], // 'o'
    [0x00, 0xFC, 0x24, 0x24, 0x18, 0x00, 0x00, 0x00], // 'p'
    [0x00, 0x18, 0x24, 0x24, 0xFC, 0x00, 0x00, 0x00], // 'q'
    [0x00, 0x00, 0x7C, 0x08, 0x04, 0x00, 0x00, 0x00], // 'r'
    [0x00, 0x48, 0x54, 0x54, 0x24, 0x00, 0x00, 0x00], // 's'
    [0x00, 0x04, 0x7F, 0x44, 0x00, 0x00, 0x00, 0x00], // 't'
    [0x00, 0x3C, 0x40, 0x40, 0x7C, 0x00, 0x00, 0x00], // 'u'
    [0x00, 0x1C, 0x20, 0x40, 0x20, 0x1C, 0x00, 0x00], // 'v'
    [0x00, 0x3C, 0x40, 0x30, 0x40, 0x3C, 0x00, 0x00], // 'w'
    [0x00, 0x44, 0x28, 0x10, 0x28, 0x44, 0x00, 0x00], // 'x'
    [0x00, 0x1C, 0xA0, 0xA0, 0x7C, 0x00, 0x00, 0x00], // 'y'
    [0x00, 0x44, 0x64, 0x54, 0x4C, 0x44, 0x00, 0x00], // 'z'
    [0x00, 0x08, 0x36, 0x41, 0x00, 0x00, 0x00, 0x00], // '{'
    [0x00, 0x00, 0x7F, 0x00, 0x00, 0x00, 0x00, 0x00], // '|'
    [0x00, 0x41, 0x36, 0x08, 0x00, 0x00, 0x00, 0x00], // '}'
    [0x00, 0x02, 0x01, 0x01, 0x02, 0x01, 0x00, 0x00], // '~'
    [0x00, 0xFF, 0x81, 0x81, 0x81, 0xFF, 0x00, 0x00], // DEL
];

/// Non-ASCII glyphs, checked before the basic table
pub static EXTENDED_FONT: [(char, Glyph); 9] = [
    ('Ä', [0x00, 0x7D, 0x0A, 0x09, 0x0A, 0x7D, 0x00, 0x00]),
    ('Ö', [0x00, 0x3D, 0x42, 0x41, 0x42, 0x3D, 0x00, 0x00]),
    ('Ü', [0x00, 0x3D, 0x40, 0x40, 0x40, 0x3D, 0x00, 0x00]),
    ('ä', [0x00, 0x21, 0x54, 0x54, 0x55, 0x78, 0x00, 0x00]),
    ('ö', [0x00, 0x39, 0x44, 0x44, 0x39, 0x00, 0x00, 0x00]),
    ('ü', [0x00, 0x3D, 0x40, 0x40, 0x7D, 0x00, 0x00, 0x00]),
    ('ß', [0x00, 0xFE, 0x09, 0x49, 0x36, 0x00, 0x00, 0x00]),
    ('€', [0x00, 0x14, 0x3E, 0x55, 0x55, 0x55, 0x14, 0x00]),
    ('°', [0x00, 0x02, 0x05, 0x02, 0x00, 0x00, 0x00, 0x00]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ascii_indexes_basic_table() {
        assert_eq!(glyph_for(' '), &BASIC_FONT[0]);
        assert_eq!(glyph_for('A'), &BASIC_FONT['A' as usize - 32]);
        assert_eq!(glyph_for('~'), &BASIC_FONT[94]);
        assert_eq!(glyph_for('\u{7F}'), &BASIC_FONT[95]);
    }

    #[test]
    fn test_known_shapes() {
        assert_eq!(
            glyph_for('A'),
            &[0x00, 0x7E, 0x09, 0x09, 0x09, 0x7E, 0x00, 0x00]
        );
        assert_eq!(
            glyph_for('0'),
            &[0x00, 0x3E, 0x51, 0x49, 0x45, 0x3E, 0x00, 0x00]
        );
        assert_eq!(glyph_for(' '), &[0x00; 8]);
    }

    #[test]
    fn test_extended_characters() {
        for (c, glyph) in EXTENDED_FONT.iter() {
            assert_eq!(glyph_for(*c), glyph, "extended glyph for {c:?}");
        }
        assert_eq!(
            glyph_for('°'),
            &[0x00, 0x02, 0x05, 0x02, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_uncovered_codepoints_fall_back() {
        assert_eq!(glyph_for('\n'), &PLACEHOLDER);
        assert_eq!(glyph_for('\u{1F}'), &PLACEHOLDER);
        assert_eq!(glyph_for('\u{80}'), &PLACEHOLDER);
        assert_eq!(glyph_for('é'), &PLACEHOLDER);
        assert_eq!(glyph_for('\u{1F600}'), &PLACEHOLDER);
    }

    proptest! {
        #[test]
        fn prop_lookup_is_total(c: char) {
            // Any scalar value resolves to exactly one of the three sources.
            let glyph = glyph_for(c);
            let code = c as u32;
            let in_extended = EXTENDED_FONT.iter().any(|(e, _)| *e == c);
            if in_extended {
                prop_assert!(EXTENDED_FONT.iter().any(|(_, g)| g == glyph));
            } else if (32..=127).contains(&code) {
                prop_assert_eq!(glyph, &BASIC_FONT[(code - 32) as usize]);
            } else {
                prop_assert_eq!(glyph, &PLACEHOLDER);
            }
        }
    }
}
