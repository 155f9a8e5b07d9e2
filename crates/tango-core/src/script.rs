use tango_types::ScriptClass;

/// Every char is an ASCII letter, ASCII digit or whitespace, and there is at least one
pub fn is_english(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
}

/// At least one hiragana, katakana or CJK ideograph.
///
/// The ideograph block is shared with Chinese and Korean hanja, so those
/// classify as Japanese too.
pub fn is_japanese(text: &str) -> bool {
    text.chars().any(is_japanese_char)
}

fn is_japanese_char(c: char) -> bool {
    matches!(c,
        'ぁ'..='ん'     // hiragana
        | 'ァ'..='ン'   // katakana
        | '一'..='龯'   // CJK unified ideographs
        | '々' | '〆' | '〤'
    )
}

pub fn classify(text: &str) -> ScriptClass {
    if is_english(text) {
        ScriptClass::English
    } else if is_japanese(text) {
        ScriptClass::Japanese
    } else {
        ScriptClass::Ambiguous
    }
}
