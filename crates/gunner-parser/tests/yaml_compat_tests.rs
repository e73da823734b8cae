//! Compatibility checks against serde_yaml
//!
//! For block-style documents built from plain words, the parser must agree
//! with a full YAML implementation once both are reduced to generic values.

use gunner_core::types::Value;
use gunner_parser::YamlParser;
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Convert a serde_yaml value holding only strings and containers
fn from_yaml(value: &serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Mapping(mapping) => Value::Map(
            mapping
                .iter()
                .map(|(k, v)| (k.as_str().unwrap_or_default().to_string(), from_yaml(v)))
                .collect(),
        ),
        serde_yaml::Value::Sequence(items) => Value::List(items.iter().map(from_yaml).collect()),
        serde_yaml::Value::String(s) => Value::String(s.clone()),
        other => panic!("unexpected YAML value: {:?}", other),
    }
}

fn assert_matches_serde_yaml(input: &str) {
    let ours = YamlParser::parse_value(input).unwrap();
    let reference: serde_yaml::Value = serde_yaml::from_str(input).unwrap();
    assert_eq!(ours, from_yaml(&reference), "document:\n{}", input);
}

#[derive(Debug, Clone)]
enum Entry {
    Word(String),
    Words(Vec<String>),
    Map(BTreeMap<String, String>),
    Items(Vec<BTreeMap<String, String>>),
}

/// Words that no YAML schema resolves to a non-string
fn word() -> impl Strategy<Value = String> + Clone {
    "x[a-z]{1,6}"
}

fn entry_strategy() -> impl Strategy<Value = Entry> {
    let words = prop::collection::vec(word(), 1..5);
    let map = prop::collection::btree_map(word(), word(), 1..4);
    prop_oneof![
        word().prop_map(Entry::Word),
        words.prop_map(Entry::Words),
        map.clone().prop_map(Entry::Map),
        prop::collection::vec(map, 1..4).prop_map(Entry::Items),
    ]
}

fn render(document: &BTreeMap<String, Entry>) -> String {
    let mut out = String::new();
    for (key, entry) in document {
        match entry {
            Entry::Word(w) => out.push_str(&format!("{}: {}\n", key, w)),
            Entry::Words(words) => {
                out.push_str(&format!("{}:\n", key));
                for w in words {
                    out.push_str(&format!("  - {}\n", w));
                }
            }
            Entry::Map(map) => {
                out.push_str(&format!("{}:\n", key));
                for (k, v) in map {
                    out.push_str(&format!("  {}: {}\n", k, v));
                }
            }
            Entry::Items(items) => {
                out.push_str(&format!("{}:\n", key));
                for item in items {
                    for (i, (k, v)) in item.iter().enumerate() {
                        let lead = if i == 0 { "  - " } else { "    " };
                        out.push_str(&format!("{}{}: {}\n", lead, k, v));
                    }
                }
            }
        }
    }
    out
}

#[test]
fn test_pipeline_shaped_document() {
    assert_matches_serde_yaml(
        "\
name: citest
jobs:
  build:
    stage: build
    needs:
      - setup
    steps:
      - name: compile
        run: make
      - name: test
        with:
          coverage: full
        env:
          mode: ci
  deploy:
    stage: deploy
",
    );
}

#[test]
fn test_comments_and_blank_lines() {
    assert_matches_serde_yaml("# top\nname: ci\n\n# between\nstage: build # trailing\n");
}

proptest! {
    #[test]
    fn test_agrees_with_serde_yaml(
        document in prop::collection::btree_map(word(), entry_strategy(), 1..6)
    ) {
        let input = render(&document);
        let ours = YamlParser::parse_value(&input).unwrap();
        let reference: serde_yaml::Value = serde_yaml::from_str(&input).unwrap();
        prop_assert_eq!(ours, from_yaml(&reference));
    }
}
