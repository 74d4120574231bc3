use kumi::grammar::{Grammar, Value};
use kumi::prelude::*;
use proptest::prelude::*;

fn grammar_strategy() -> impl Strategy<Value = Grammar> {
    let leaf = prop_oneof![
        Just(Grammar::character()),
        "[a-c]{1,3}".prop_map(Grammar::tag),
    ];
    leaf.prop_recursive(4, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Grammar::sequence(a, b)),
            inner.prop_map(Grammar::repeat),
        ]
    })
}

proptest! {
    #[test]
    fn compiled_matches_hand_built(source in "[itwx!]{0,16}") {
        let compiled = Grammar::sequence(Grammar::repeat(Grammar::tag("it")), Grammar::character())
            .compile()
            .unwrap();
        let hand_built = sequence(repeat(tag("it")), character());
        let input = Input::new(&source);

        let expected = hand_built.parse(input).map(|(rest, (spans, c))| {
            let list = Value::List(spans.into_iter().map(Value::Span).collect());
            (rest, Value::Pair(Box::new(list), Box::new(Value::Char(c))))
        });

        prop_assert_eq!(compiled.parse(input), expected);
    }

    #[test]
    fn grammar_survives_json(grammar in grammar_strategy()) {
        let json = serde_json::to_string(&grammar).unwrap();
        let decoded: Grammar = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&decoded, &grammar);
        prop_assert_eq!(decoded.to_string(), grammar.to_string());
    }
}
