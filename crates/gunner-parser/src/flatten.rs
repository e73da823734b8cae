//! Tree to generic value conversion

use gunner_core::ast::Node;
use gunner_core::types::Value;

/// Convert a document tree into a generic `Value`
///
/// Scalars become strings, mappings become maps (key order is dropped)
/// and sequences become lists (order kept).
pub fn flatten(node: &Node) -> Value {
    match node {
        Node::Scalar(s) => Value::String(s.clone()),
        Node::Mapping(mapping) => Value::Map(
            mapping
                .iter()
                .map(|(key, child)| (key.to_string(), flatten(child)))
                .collect(),
        ),
        Node::Sequence(items) => Value::List(items.iter().map(flatten).collect()),
    }
}
