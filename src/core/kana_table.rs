// File: src/core/kana_table.rs
//! Kana to Hepburn-style romaji lookup tables.
//!
//! Katakana is looked up by folding it onto the matching hiragana codepoint
//! (the two blocks are laid out in parallel, 0x60 apart), so both scripts share
//! one table. The prolonged sound mark `ー` sits outside the folded range and is
//! listed directly.

/// Small "tsu", the gemination marker. Doubles the next consonant.
pub const SOKUON: char = 'っ';
/// Katakana prolonged sound mark. Silent in the romanization.
pub const CHOONPU: char = 'ー';

const KATAKANA_OFFSET: u32 = 0x60;

fn is_foldable_katakana(c: char) -> bool {
    ('\u{30A1}'..='\u{30F6}').contains(&c)
}

/// Maps `ァ..=ヶ` onto `ぁ..=ゖ`; every other char is returned unchanged.
pub fn fold_katakana(c: char) -> char {
    if is_foldable_katakana(c) {
        char::from_u32(c as u32 - KATAKANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// Romaji for a single kana of either script. The two markers map to "".
pub fn syllable(c: char) -> Option<&'static str> {
    hiragana(fold_katakana(c))
}

/// Romaji for a palatalized two-kana syllable such as `きゃ` or `シュ`.
/// Both kana must come from the same script: `きョ` is not a digraph.
pub fn digraph(first: char, second: char) -> Option<&'static str> {
    if is_foldable_katakana(first) != is_foldable_katakana(second) {
        return None;
    }
    hiragana_digraph(fold_katakana(first), fold_katakana(second))
}

/// Whether `c` is the gemination marker in either script.
pub fn is_sokuon(c: char) -> bool {
    fold_katakana(c) == SOKUON
}

#[rustfmt::skip]
fn hiragana(c: char) -> Option<&'static str> {
    let romaji = match c {
        'あ' => "a", 'い' => "i", 'う' => "u", 'え' => "e", 'お' => "o",
        'か' => "ka", 'き' => "ki", 'く' => "ku", 'け' => "ke", 'こ' => "ko",
        'が' => "ga", 'ぎ' => "gi", 'ぐ' => "gu", 'げ' => "ge", 'ご' => "go",
        'さ' => "sa", 'し' => "shi", 'す' => "su", 'せ' => "se", 'そ' => "so",
        'ざ' => "za", 'じ' => "ji", 'ず' => "zu", 'ぜ' => "ze", 'ぞ' => "zo",
        'た' => "ta", 'ち' => "chi", 'つ' => "tsu", 'て' => "te", 'と' => "to",
        'だ' => "da", 'ぢ' => "ji", 'づ' => "zu", 'で' => "de", 'ど' => "do",
        'な' => "na", 'に' => "ni", 'ぬ' => "nu", 'ね' => "ne", 'の' => "no",
        'は' => "ha", 'ひ' => "hi", 'ふ' => "fu", 'へ' => "he", 'ほ' => "ho",
        'ば' => "ba", 'び' => "bi", 'ぶ' => "bu", 'べ' => "be", 'ぼ' => "bo",
        'ぱ' => "pa", 'ぴ' => "pi", 'ぷ' => "pu", 'ぺ' => "pe", 'ぽ' => "po",
        'ま' => "ma", 'み' => "mi", 'む' => "mu", 'め' => "me", 'も' => "mo",
        'や' => "ya", 'ゆ' => "yu", 'よ' => "yo",
        'ら' => "ra", 'り' => "ri", 'る' => "ru", 'れ' => "re", 'ろ' => "ro",
        'わ' => "wa", 'ゐ' => "wi", 'ゑ' => "we", 'を' => "wo", 'ん' => "n",
        SOKUON | CHOONPU => "",
        _ => return None,
    };
    Some(romaji)
}

#[rustfmt::skip]
fn hiragana_digraph(first: char, second: char) -> Option<&'static str> {
    let romaji = match (first, second) {
        ('き', 'ゃ') => "kya", ('き', 'ゅ') => "kyu", ('き', 'ょ') => "kyo",
        ('ぎ', 'ゃ') => "gya", ('ぎ', 'ゅ') => "gyu", ('ぎ', 'ょ') => "gyo",
        ('し', 'ゃ') => "sha", ('し', 'ゅ') => "shu", ('し', 'ょ') => "sho",
        ('じ', 'ゃ') => "ja", ('じ', 'ゅ') => "ju", ('じ', 'ょ') => "jo",
        ('ち', 'ゃ') => "cha", ('ち', 'ゅ') => "chu", ('ち', 'ょ') => "cho",
        ('に', 'ゃ') => "nya", ('に', 'ゅ') => "nyu", ('に', 'ょ') => "nyo",
        ('ひ', 'ゃ') => "hya", ('ひ', 'ゅ') => "hyu", ('ひ', 'ょ') => "hyo",
        ('び', 'ゃ') => "bya", ('び', 'ゅ') => "byu", ('び', 'ょ') => "byo",
        ('ぴ', 'ゃ') => "pya", ('ぴ', 'ゅ') => "pyu", ('ぴ', 'ょ') => "pyo",
        ('み', 'ゃ') => "mya", ('み', 'ゅ') => "myu", ('み', 'ょ') => "myo",
        ('り', 'ゃ') => "rya", ('り', 'ゅ') => "ryu", ('り', 'ょ') => "ryo",
        _ => return None,
    };
    Some(romaji)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn katakana_folds_onto_hiragana() {
        assert_eq!(fold_katakana('ア'), 'あ');
        assert_eq!(fold_katakana('ッ'), 'っ');
        assert_eq!(fold_katakana('ン'), 'ん');
        assert_eq!(fold_katakana('ー'), 'ー');
        assert_eq!(fold_katakana('a'), 'a');
        assert_eq!(fold_katakana('漢'), '漢');
    }

    #[test]
    fn both_scripts_share_one_table() {
        assert_eq!(syllable('か'), Some("ka"));
        assert_eq!(syllable('カ'), Some("ka"));
        assert_eq!(syllable('ヲ'), Some("wo"));
        assert_eq!(digraph('シ', 'ャ'), Some("sha"));
        assert_eq!(digraph('し', 'ゃ'), Some("sha"));
    }

    #[test]
    fn mixed_script_pairs_are_not_digraphs() {
        assert_eq!(digraph('き', 'ョ'), None);
        assert_eq!(digraph('キ', 'ょ'), None);
        assert_eq!(digraph('ニ', 'ュ'), Some("nyu"));
    }

    #[test]
    fn markers_map_to_empty_fragment() {
        assert_eq!(syllable('っ'), Some(""));
        assert_eq!(syllable('ッ'), Some(""));
        assert_eq!(syllable('ー'), Some(""));
        assert!(is_sokuon('っ'));
        assert!(is_sokuon('ッ'));
        assert!(!is_sokuon('つ'));
    }

    #[test]
    fn unmapped_kana_are_absent() {
        assert_eq!(syllable('ゃ'), None);
        assert_eq!(syllable('ヴ'), None);
        assert_eq!(syllable('ヶ'), None);
        assert_eq!(digraph('か', 'ゃ'), None);
    }
}
