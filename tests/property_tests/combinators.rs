use kumi::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn sequence_succeeds_iff_both_succeed(
        first in "[ab]{1,3}",
        second in "[ab]{1,3}",
        source in "[ab]{0,8}",
    ) {
        let parser = sequence(tag(first.as_str()), tag(second.as_str()));
        let input = Input::new(&source);

        let expected = tag(first.as_str())
            .parse(input)
            .and_then(|(rest, a)| tag(second.as_str()).parse(rest).map(|(rest, b)| (rest, (a, b))));

        prop_assert_eq!(parser.parse(input), expected);
    }

    #[test]
    fn repeat_is_greedy(literal in "[a-z]{1,4}", count in 0usize..20, tail in "[A-Z0-9]{0,5}") {
        let source = format!("{}{}", literal.repeat(count), tail);

        let (rest, spans) = apply(&repeat(tag(literal.as_str())), source.as_str()).unwrap();

        prop_assert_eq!(spans.len(), count);
        prop_assert_eq!(spans.capacity(), spans.len());
        for (i, span) in spans.iter().enumerate() {
            prop_assert_eq!(span.offset(), i * literal.len());
            prop_assert_eq!(span.fragment(), literal.as_str());
        }
        prop_assert_eq!(rest.rest(), tail.as_str());
    }

    #[test]
    fn repeat_never_fails(literal in "[a-c]{1,3}", source in "[a-c]{0,16}") {
        let parser = repeat(tag(literal.as_str()));
        let input = Input::new(&source);

        let (rest, spans) = parser.parse(input).unwrap();
        prop_assert_eq!(rest.offset(), spans.len() * literal.len());

        // 残りに対してもう一度適用しても何も消費しない
        let (again, more) = parser.parse(rest).unwrap();
        prop_assert!(more.is_empty());
        prop_assert_eq!(again, rest);
    }

    #[test]
    fn repeat_of_character_consumes_everything(source in "\\PC{0,16}") {
        let (rest, chars) = apply(&repeat(character()), source.as_str()).unwrap();
        prop_assert!(rest.is_empty());
        prop_assert_eq!(chars.into_iter().collect::<String>(), source);
    }
}
