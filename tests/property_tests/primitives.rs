use kumi::prelude::*;
use proptest::prelude::*;

fn literal_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

proptest! {
    #[test]
    fn tag_fails_on_shorter_input(literal in literal_strategy(), cut in 0usize..8) {
        let cut = cut % literal.len();
        let source = &literal[..cut];
        let input = Input::new(source);

        prop_assert_eq!(apply(&tag(literal.as_str()), input), Err(ParseError));
        prop_assert_eq!(input.rest(), source);
    }

    #[test]
    fn tag_matches_prefix(literal in literal_strategy(), suffix in "[ -~]{0,10}") {
        let source = format!("{}{}", literal, suffix);

        let (rest, span) = apply(&tag(literal.as_str()), source.as_str()).unwrap();

        prop_assert_eq!(span.offset(), 0);
        prop_assert_eq!(span.len(), literal.len());
        prop_assert_eq!(span.fragment(), literal.as_str());
        prop_assert_eq!(rest.offset(), literal.len());
        prop_assert_eq!(rest.rest(), suffix.as_str());
    }

    #[test]
    fn tag_rejects_any_mismatch(literal in "[a-z]{1,8}", source in "[A-Z]{0,12}") {
        // 小文字のリテラルは大文字だけの入力に一致しない
        prop_assert_eq!(apply(&tag(literal.as_str()), source.as_str()), Err(ParseError));
    }

    #[test]
    fn character_fails_only_on_empty(source in "\\PC{0,12}") {
        match apply(&character(), source.as_str()) {
            Ok((rest, c)) => {
                prop_assert_eq!(source.chars().next(), Some(c));
                prop_assert_eq!(rest.offset(), c.len_utf8());
                prop_assert_eq!(rest.rest(), &source[c.len_utf8()..]);
            }
            Err(ParseError) => prop_assert!(source.is_empty()),
        }
    }

    #[test]
    fn parsing_is_repeatable(literal in literal_strategy(), source in "[a-z]{0,12}") {
        let parser = tag(literal.as_str());
        let input = Input::new(&source);
        prop_assert_eq!(parser.parse(input), parser.parse(input));
    }
}
