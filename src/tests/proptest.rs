mod prop_tests {
    use std::sync::LazyLock;

    use crate::testing::fixtures::alter_cache;
    use crate::unicode::clean_up_input_text;
    use crate::{Language, LanguageDetector, LanguageDetectorBuilder, Ngram};
    use proptest::prelude::*;

    static ALTER_DETECTOR: LazyLock<LanguageDetector> = LazyLock::new(|| {
        LanguageDetectorBuilder::from_languages(&[Language::English, Language::German])
            .with_model_cache(alter_cache())
            .build()
            .unwrap()
    });

    proptest! {
        #[test]
        fn lower_order_chain_is_a_prefix_ladder(s in "[a-zäöüßа-я]{1,5}") {
            let ngram = Ngram::new(s.as_str());
            let chain = ngram.lower_order_chain();
            let n = s.chars().count();
            prop_assert_eq!(chain.len(), n);
            for (i, prefix) in chain.iter().enumerate() {
                prop_assert_eq!(prefix.chars().count(), n - i);
                prop_assert!(s.starts_with(prefix));
            }
            prop_assert_eq!(chain.last().map(|p| p.chars().count()), Some(1));
        }

        #[test]
        fn longer_than_five_is_rejected(s in "[a-z]{6,12}") {
            prop_assert!(Ngram::try_new(s).is_err());
        }

        #[test]
        fn confidence_values_are_relative(text in "[a-zA-Z ,.!0-9]{0,40}") {
            let values = ALTER_DETECTOR.compute_language_confidence_values(&text);
            prop_assert!(values.len() <= 2);
            if let Some(first) = values.first() {
                prop_assert_eq!(first.value(), 1.0);
            }
            for pair in values.windows(2) {
                prop_assert!(pair[0].value() >= pair[1].value());
            }
            for value in &values {
                prop_assert!(value.value() > 0.0 && value.value() <= 1.0);
            }
        }

        #[test]
        fn detection_is_deterministic(text in "[altergz ]{0,30}") {
            let first = ALTER_DETECTOR.detect_language_of(&text);
            prop_assert_eq!(ALTER_DETECTOR.detect_language_of(&text), first);
        }

        #[test]
        fn cleaned_text_is_normalized(text in "\\PC{0,60}") {
            let cleaned = clean_up_input_text(&text);
            prop_assert!(!cleaned.starts_with(' ') && !cleaned.ends_with(' '));
            prop_assert!(!cleaned.contains("  "));
            // ASCII symbols outside the punctuation category survive.
            const SYMBOLS: &str = "$+<=>^`|~";
            prop_assert!(!cleaned
                .chars()
                .any(|c| c.is_ascii_digit() || (c.is_ascii_punctuation() && !SYMBOLS.contains(c))));
        }

        #[test]
        fn language_names_round_trip(index in 0usize..75) {
            let language = Language::all()[index];
            let json = serde_json::to_string(&language).unwrap();
            prop_assert_eq!(&json, &format!("\"{}\"", language.name()));
            prop_assert_eq!(serde_json::from_str::<Language>(&json).unwrap(), language);
        }
    }
}
