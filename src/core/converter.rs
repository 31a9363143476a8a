use crate::core::kana_table;

/// Kana to romaji converter.
///
/// Greedy left-to-right scan over codepoints: a two-kana digraph is tried
/// before the single kana at every position. Anything that is not kana passes
/// through unchanged, so the conversion never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct Romanizer;

impl Romanizer {
    pub fn new() -> Self {
        Self
    }

    /// Transliterates a full kana string.
    pub fn transliterate(&self, kana: &str) -> String {
        let chars: Vec<char> = kana.chars().collect();
        let mut result = String::with_capacity(kana.len());
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if let Some(&next) = chars.get(i + 1) {
                if let Some(romaji) = kana_table::digraph(c, next) {
                    result.push_str(romaji);
                    i += 2;
                    continue;
                }
            }

            match kana_table::syllable(c) {
                Some(_) if kana_table::is_sokuon(c) => {
                    // Borrow the first letter of the following kana; that kana
                    // still emits its own full romaji on the next step.
                    let doubled = chars
                        .get(i + 1)
                        .and_then(|&next| kana_table::syllable(next))
                        .and_then(|romaji| romaji.chars().next());
                    if let Some(consonant) = doubled {
                        result.push(consonant);
                    }
                }
                Some(romaji) => result.push_str(romaji),
                None => result.push(c),
            }
            i += 1;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn romaji(kana: &str) -> String {
        Romanizer::new().transliterate(kana)
    }

    #[test]
    fn plain_syllables() {
        assert_eq!(romaji("おはよう"), "ohayou");
        assert_eq!(romaji("ありがとう"), "arigatou");
        assert_eq!(romaji("しんぶん"), "shinbun");
        assert_eq!(romaji(""), "");
    }

    #[test]
    fn digraph_wins_over_single_kana() {
        assert_eq!(romaji("きょう"), "kyou");
        assert_eq!(romaji("しゃしん"), "shashin");
        assert_eq!(romaji("じゅぎょう"), "jugyou");
        assert_ne!(romaji("きょ"), format!("{}{}", romaji("き"), romaji("ょ")));
    }

    #[test]
    fn sokuon_doubles_following_consonant() {
        assert_eq!(romaji("がっこう"), "gakkou");
        assert_eq!(romaji("きって"), "kitte");
        assert_eq!(romaji("ざっし"), "zasshi");
        assert_eq!(romaji("ベッド"), "beddo");
        // Only the first kana of a following digraph is consulted.
        assert_eq!(romaji("いっしょ"), "issho");
        assert_eq!(romaji("まっちゃ"), "maccha");
    }

    #[test]
    fn sokuon_without_a_usable_follower_is_silent() {
        assert_eq!(romaji("あっ"), "a");
        assert_eq!(romaji("っっか"), "kka");
        assert_eq!(romaji("ッー"), "");
        assert_eq!(romaji("っA"), "A");
        assert_eq!(romaji("っ!"), "!");
    }

    #[test]
    fn long_vowel_mark_is_silent() {
        assert_eq!(romaji("コーヒー"), "kohi");
        assert_eq!(romaji("ラーメン"), "ramen");
        assert_eq!(romaji("ー"), "");
    }

    #[test]
    fn katakana_and_mixed_script() {
        assert_eq!(romaji("テレビ"), "terebi");
        assert_eq!(romaji("ジャズ"), "jazu");
        assert_eq!(romaji("カっぷ"), "kappu");
    }

    #[test]
    fn small_kana_from_the_other_script_passes_through() {
        assert_eq!(romaji("きョう"), "kiョu");
        assert_eq!(romaji("シゃ"), "shiゃ");
    }

    #[test]
    fn unknown_characters_pass_through_in_place() {
        assert_eq!(romaji("たべる。"), "taberu。");
        assert_eq!(romaji("学校"), "学校");
        assert_eq!(romaji("A1か"), "A1ka");
        assert_eq!(romaji("ゃ"), "ゃ");
        assert_eq!(romaji("ヴァ"), "ヴァ");
    }
}
