//! Full-width to half-width folding

const IDEOGRAPHIC_SPACE: char = '\u{3000}';
const FULL_WIDTH_START: u32 = 0xFF01;
const FULL_WIDTH_END: u32 = 0xFF5E;
const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

/// Fold full-width ASCII variants (Ａ, １, ％, ideographic space) to ASCII
pub fn to_half_width(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

fn fold_char(ch: char) -> char {
    let code = ch as u32;
    if ch == IDEOGRAPHIC_SPACE {
        ' '
    } else if (FULL_WIDTH_START..=FULL_WIDTH_END).contains(&code) {
        char::from_u32(code - FULL_WIDTH_OFFSET).unwrap_or(ch)
    } else {
        ch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folds_digits_letters_and_symbols() {
        assert_eq!(to_half_width("１５３．５ｃｍ"), "153.5cm");
        assert_eq!(to_half_width("０．１％"), "0.1%");
        assert_eq!(to_half_width("ＡＢＣ！～"), "ABC!~");
    }

    #[test]
    fn test_ideographic_space() {
        assert_eq!(to_half_width("a\u{3000}b"), "a b");
    }

    #[test]
    fn test_leaves_other_text() {
        assert_eq!(to_half_width("中文，。"), "中文,。");
        assert_eq!(to_half_width("中文、「」"), "中文、「」");
        assert_eq!(to_half_width("plain 123"), "plain 123");
        assert_eq!(to_half_width(""), "");
    }
}
