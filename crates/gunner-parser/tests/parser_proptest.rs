//! Property-based tests for the tokenizer and tree builder
//!
//! Documents are generated from small line-level strategies so that the
//! expected structure is known up front.

use gunner_core::types::Value;
use gunner_parser::{flatten, TokenKind, Tokenizer, YamlParser};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

/// Inline values: no comment marker, no surrounding whitespace
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]([a-zA-Z0-9 ._/:-]{0,12}[a-zA-Z0-9])?"
}

fn flat_mapping_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(key_strategy(), value_strategy(), 1..10)
}

fn render_flat(entries: &BTreeMap<String, String>, indent: usize) -> Vec<String> {
    entries
        .iter()
        .map(|(k, v)| format!("{}{}: {}", " ".repeat(indent), k, v))
        .collect()
}

/// Nesting depths where each line is at most one level deeper than the last
fn depth_path_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(-3i32..=1, 0..30).prop_map(|steps| {
        let mut depth = 0i32;
        let mut path = vec![0usize];
        for step in steps {
            depth = (depth + step).max(0);
            path.push(depth as usize);
        }
        path
    })
}

fn noise_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("    ".to_string()),
        Just("# note".to_string()),
        Just("      # indented note".to_string()),
    ]
}

proptest! {
    #[test]
    fn test_flat_scalars_round_trip(entries in flat_mapping_strategy()) {
        let input = render_flat(&entries, 0).join("\n");
        let value = YamlParser::parse_value(&input).unwrap();

        let expected = Value::Map(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect(),
        );
        prop_assert_eq!(value, expected);
    }

    #[test]
    fn test_padded_values_are_trimmed(
        entries in flat_mapping_strategy(),
        pad in " {0,3}",
    ) {
        let input = entries
            .iter()
            .map(|(k, v)| format!("{}:{} {}{}", k, pad, v, pad))
            .collect::<Vec<_>>()
            .join("\n");
        let value = YamlParser::parse_value(&input).unwrap();

        for (k, v) in &entries {
            prop_assert_eq!(value.get(k).and_then(Value::as_str), Some(v.as_str()));
        }
    }

    #[test]
    fn test_indent_dedent_balance(path in depth_path_strategy()) {
        let input = path
            .iter()
            .enumerate()
            .map(|(i, depth)| format!("{}k{}: v", "  ".repeat(*depth), i))
            .collect::<Vec<_>>()
            .join("\n");
        let increases = path.windows(2).filter(|w| w[1] > w[0]).count();

        let mut tokenizer = Tokenizer::new(&input);
        let tokens = tokenizer.tokenize();
        let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
        let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();

        prop_assert_eq!(indents, increases);
        prop_assert_eq!(dedents, increases);
        prop_assert_eq!(tokenizer.indent_depth(), 1);
        prop_assert!(tokenizer.diagnostics().is_empty());
    }

    #[test]
    fn test_noise_lines_are_invisible(
        entries in flat_mapping_strategy(),
        nested in any::<bool>(),
        noise in noise_line_strategy(),
        at in any::<prop::sample::Index>(),
    ) {
        let indent = if nested { 2 } else { 0 };
        let mut lines = render_flat(&entries, indent);
        if nested {
            lines.insert(0, "root:".to_string());
        }
        let clean = lines.join("\n");

        // Between siblings or after the last one
        let first_sibling = usize::from(nested) + 1;
        let position = first_sibling + at.index(lines.len() - first_sibling + 1);
        lines.insert(position, noise);
        let noisy = lines.join("\n");

        prop_assert_eq!(
            YamlParser::parse(&clean).unwrap(),
            YamlParser::parse(&noisy).unwrap()
        );
    }

    #[test]
    fn test_arbitrary_input_never_panics(input in "[a-z :#\t\n-]{0,80}") {
        let mut tokenizer = Tokenizer::new(&input);
        let tokens = tokenizer.tokenize();

        let ends = tokens.iter().filter(|t| t.kind == TokenKind::EndOfInput).count();
        prop_assert_eq!(ends, 1);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
        prop_assert_eq!(tokenizer.indent_depth(), 1);

        let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
        let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
        prop_assert_eq!(indents, dedents);

        let tree = YamlParser::parse(&input).unwrap();
        prop_assert_eq!(flatten(&tree), flatten(&tree));
    }
}
