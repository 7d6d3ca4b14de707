//! Accent-insensitive rune folding.
//!
//! Decorated latin letters, compatibility forms and a handful of look-alikes
//! are mapped back to the plain ASCII letter they resemble, so that a query
//! typed without diacritics still finds `café`, `Ørsted` or `Nguyễn`.
//!
//! The table is dense over [`NORMALIZE_MIN`]`..=`[`NORMALIZE_MAX`] and built
//! once on first use. Everything outside that range is returned unchanged.

use std::sync::LazyLock;

use unicode_normalization::char::compose;

/// Lowest code point that may be rewritten.
pub const NORMALIZE_MIN: u32 = 0x00C0;
/// Highest code point that may be rewritten.
pub const NORMALIZE_MAX: u32 = 0x2184;

/// Combining diacritical marks block.
const COMBINING_MARKS: std::ops::RangeInclusive<u32> = 0x0300..=0x036F;

/// Look-alike and compatibility code points that do not decompose to a base
/// letter under canonical composition.
#[rustfmt::skip]
const LOOK_ALIKES: &[(u32, u8)] = &[
    (0x00D8, b'O'), (0x00DF, b's'), (0x00F8, b'o'), (0x0111, b'd'), (0x0127, b'h'),
    (0x0131, b'i'), (0x0140, b'l'), (0x0142, b'l'), (0x0167, b't'), (0x017F, b's'),
    (0x0180, b'b'), (0x0181, b'B'), (0x0183, b'b'), (0x0186, b'O'), (0x0188, b'c'),
    (0x0189, b'D'), (0x018A, b'D'), (0x018C, b'd'), (0x018E, b'E'), (0x0190, b'E'),
    (0x0192, b'f'), (0x0193, b'G'), (0x0197, b'I'), (0x0199, b'k'), (0x019A, b'l'),
    (0x019C, b'M'), (0x019D, b'N'), (0x019E, b'n'), (0x019F, b'O'), (0x01A5, b'p'),
    (0x01AB, b't'), (0x01AD, b't'), (0x01AE, b'T'), (0x01B2, b'V'), (0x01B4, b'y'),
    (0x01B6, b'z'), (0x01DD, b'e'), (0x01E5, b'g'), (0x0220, b'N'), (0x0221, b'd'),
    (0x0225, b'z'), (0x0234, b'l'), (0x0235, b'n'), (0x0236, b't'), (0x0237, b'j'),
    (0x023A, b'A'), (0x023B, b'C'), (0x023C, b'c'), (0x023D, b'L'), (0x023E, b'T'),
    (0x023F, b's'), (0x0240, b'z'), (0x0243, b'B'), (0x0244, b'U'), (0x0245, b'V'),
    (0x0246, b'E'), (0x0247, b'e'), (0x0248, b'J'), (0x0249, b'j'), (0x024A, b'Q'),
    (0x024B, b'q'), (0x024C, b'R'), (0x024D, b'r'), (0x024E, b'Y'), (0x024F, b'y'),
    (0x0250, b'a'), (0x0251, b'a'), (0x0253, b'b'), (0x0254, b'o'), (0x0255, b'c'),
    (0x0256, b'd'), (0x0257, b'd'), (0x0258, b'e'), (0x025B, b'e'), (0x025C, b'e'),
    (0x025D, b'e'), (0x025E, b'e'), (0x025F, b'j'), (0x0260, b'g'), (0x0261, b'g'),
    (0x0262, b'G'), (0x0265, b'h'), (0x0266, b'h'), (0x0268, b'i'), (0x026A, b'I'),
    (0x026B, b'l'), (0x026C, b'l'), (0x026D, b'l'), (0x026F, b'm'), (0x0270, b'm'),
    (0x0271, b'm'), (0x0272, b'n'), (0x0273, b'n'), (0x0274, b'N'), (0x0275, b'o'),
    (0x0279, b'r'), (0x027A, b'r'), (0x027B, b'r'), (0x027C, b'r'), (0x027D, b'r'),
    (0x027E, b'r'), (0x027F, b'r'), (0x0280, b'R'), (0x0281, b'R'), (0x0282, b's'),
    (0x0287, b't'), (0x0288, b't'), (0x0289, b'u'), (0x028B, b'v'), (0x028C, b'v'),
    (0x028D, b'w'), (0x028E, b'y'), (0x028F, b'Y'), (0x0290, b'z'), (0x0291, b'z'),
    (0x0297, b'c'), (0x0299, b'B'), (0x029A, b'e'), (0x029B, b'G'), (0x029C, b'H'),
    (0x029D, b'j'), (0x029E, b'k'), (0x029F, b'L'), (0x02A0, b'q'), (0x02AE, b'h'),
    (0x0363, b'a'), (0x0364, b'e'), (0x0365, b'i'), (0x0366, b'o'), (0x0367, b'u'),
    (0x0368, b'c'), (0x0369, b'd'), (0x036A, b'h'), (0x036B, b'm'), (0x036C, b'r'),
    (0x036D, b't'), (0x036E, b'v'), (0x036F, b'x'), (0x1D00, b'A'), (0x1D03, b'B'),
    (0x1D04, b'C'), (0x1D05, b'D'), (0x1D07, b'E'), (0x1D08, b'e'), (0x1D09, b'i'),
    (0x1D0A, b'J'), (0x1D0B, b'K'), (0x1D0C, b'L'), (0x1D0D, b'M'), (0x1D0E, b'N'),
    (0x1D0F, b'O'), (0x1D10, b'O'), (0x1D11, b'o'), (0x1D12, b'o'), (0x1D13, b'o'),
    (0x1D16, b'o'), (0x1D17, b'o'), (0x1D18, b'P'), (0x1D19, b'R'), (0x1D1A, b'R'),
    (0x1D1B, b'T'), (0x1D1C, b'U'), (0x1D1D, b'u'), (0x1D1E, b'u'), (0x1D1F, b'm'),
    (0x1D20, b'V'), (0x1D21, b'W'), (0x1D22, b'Z'), (0x1D62, b'i'), (0x1D63, b'r'),
    (0x1D64, b'u'), (0x1D65, b'v'), (0x1E9A, b'a'), (0x1E9B, b's'), (0x2071, b'i'),
    (0x2095, b'h'), (0x2096, b'k'), (0x2097, b'l'), (0x2098, b'm'), (0x2099, b'n'),
    (0x209A, b'p'), (0x209B, b's'), (0x209C, b't'), (0x2184, b'c'),
];

/// Vietnamese vowels with a tone mark stacked on another diacritic. Inside
/// each range even code points are upper-case, odd ones lower-case.
const VIETNAMESE: &[(u8, u32, u32)] = &[
    (b'a', 0x1EA4, 0x1EB7),
    (b'e', 0x1EBE, 0x1EC7),
    (b'o', 0x1ED0, 0x1EE3),
    (b'u', 0x1EE8, 0x1EF1),
];

/// Dense lookup table, `0` marks "no mapping".
static TABLE: LazyLock<Box<[u8]>> = LazyLock::new(build_table);

fn build_table() -> Box<[u8]> {
    let mut table = vec![0u8; (NORMALIZE_MAX - NORMALIZE_MIN + 1) as usize];
    let mut set = |cp: u32, ascii: u8| {
        if (NORMALIZE_MIN..=NORMALIZE_MAX).contains(&cp) {
            table[(cp - NORMALIZE_MIN) as usize] = ascii;
        }
    };

    for &(cp, ascii) in LOOK_ALIKES {
        set(cp, ascii);
    }

    for mark in COMBINING_MARKS.filter_map(char::from_u32) {
        for ascii in (b'A'..=b'Z').chain(b'a'..=b'z') {
            if let Some(composed) = compose(ascii as char, mark)
                && composed as u32 > 0x7E
            {
                set(composed as u32, ascii);
            }
        }
    }

    for &(lower, first, last) in VIETNAMESE {
        let upper = lower.to_ascii_uppercase();
        for cp in first..=last {
            set(cp, if cp % 2 == 0 { upper } else { lower });
        }
    }

    table.into_boxed_slice()
}

/// Map a decorated rune to its plain ASCII letter, or return it unchanged.
#[inline]
pub fn normalize_rune(c: char) -> char {
    let cp = c as u32;
    if !(NORMALIZE_MIN..=NORMALIZE_MAX).contains(&cp) {
        return c;
    }
    match TABLE[(cp - NORMALIZE_MIN) as usize] {
        0 => c,
        ascii => ascii as char,
    }
}
