/// Folds a romaji string into the form used for answer comparison.
///
/// Lowercases, spells long vowels written with a macron (or circumflex) as a
/// doubled vowel (`ō` becomes `ou`), and drops all whitespace and hyphens, so
/// `"Tōkyō"`, `"toukyou"` and `"tou-kyou"` compare equal. Idempotent.
pub fn normalize_romaji(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut normalized = String::with_capacity(lowered.len());

    for c in lowered.trim().chars() {
        if c.is_whitespace() || c == '-' {
            continue;
        }
        match long_vowel(c) {
            Some(doubled) => normalized.push_str(doubled),
            None => normalized.push(c),
        }
    }

    normalized
}

fn long_vowel(c: char) -> Option<&'static str> {
    match c {
        'ō' | 'ô' => Some("ou"),
        'ū' | 'û' => Some("uu"),
        'ā' | 'â' => Some("aa"),
        'ē' | 'ê' => Some("ee"),
        'ī' | 'î' => Some("ii"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn macron_and_doubled_spellings_agree() {
        assert_eq!(normalize_romaji("Toukyou"), "toukyou");
        assert_eq!(normalize_romaji("Tōkyō"), "toukyou");
        assert_eq!(normalize_romaji("TŌKYŌ"), "toukyou");
        assert_eq!(normalize_romaji("Tôkyô"), "toukyou");
        assert_eq!(normalize_romaji("kūki"), "kuuki");
        assert_eq!(normalize_romaji("okāsan"), "okaasan");
        assert_eq!(normalize_romaji("onēsan"), "oneesan");
        assert_eq!(normalize_romaji("ojīsan"), "ojiisan");
    }

    #[test]
    fn spacing_and_hyphens_are_ignored() {
        assert_eq!(normalize_romaji("  ohayou  "), "ohayou");
        assert_eq!(normalize_romaji("ohayou gozaimasu"), "ohayougozaimasu");
        assert_eq!(normalize_romaji("o-ha-yo-u"), "ohayou");
        assert_eq!(normalize_romaji("\tgak kou\n"), "gakkou");
    }

    #[test]
    fn empty_and_blank_inputs() {
        assert_eq!(normalize_romaji(""), "");
        assert_eq!(normalize_romaji("   "), "");
        assert_eq!(normalize_romaji("- -"), "");
    }

    #[test]
    fn hyphen_then_tab_does_not_leave_leading_whitespace() {
        let once = normalize_romaji("- \tx");
        assert_eq!(once, "x");
        assert_eq!(normalize_romaji(&once), once);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "[a-zA-Z ōūāēīŌŪĀĒĪôûâêî\\-\t\n。0-9]{0,40}") {
            let once = normalize_romaji(&s);
            prop_assert_eq!(normalize_romaji(&once), once);
        }

        #[test]
        fn normalized_output_has_no_spacing_or_capitals(s in "[a-zA-Z ōŌ\\-]{0,40}") {
            let out = normalize_romaji(&s);
            prop_assert!(!out.contains(' '));
            prop_assert!(!out.contains('-'));
            prop_assert!(!out.chars().any(|c| c.is_uppercase()));
        }
    }
}
