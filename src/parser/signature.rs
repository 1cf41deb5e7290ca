//! Field type shapes and their display signatures.
//!
//! Config structs only use a handful of type shapes. Anything else is
//! reported as [`TypeShape::Unsupported`] so the caller decides what to do.

use crate::parser::comment::text;
use tree_sitter::Node;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// `int`, `Duration`, `time.Duration`
    Named(String),
    /// `[]T` or `[N]T`, holding the element's text
    Sequence(String),
    /// `map[K]V`
    Mapping { key: String, value: String },
    /// `*T`, holding the referent's text
    Indirection(String),
    /// An embedded member (`Base` or `*Base`)
    Embedded { composite: String },
    Unsupported { kind: String, text: String },
}

impl TypeShape {
    /// Classify the `type` node of a field declaration.
    ///
    /// `embedded` is set for declarations without a field name; a leading `*`
    /// on an embedded member is a sibling token and is already gone here.
    pub fn classify(ty: Node, embedded: bool, source: &str) -> TypeShape {
        if embedded {
            return match ty.kind() {
                "type_identifier" | "qualified_type" => TypeShape::Embedded {
                    composite: text(&ty, source).to_string(),
                },
                _ => unsupported(ty, source),
            };
        }

        match ty.kind() {
            "type_identifier" | "qualified_type" => TypeShape::Named(text(&ty, source).to_string()),
            "slice_type" | "array_type" => match ty.child_by_field_name("element") {
                Some(element) => TypeShape::Sequence(text(&element, source).to_string()),
                None => unsupported(ty, source),
            },
            "map_type" => match (ty.child_by_field_name("key"), ty.child_by_field_name("value")) {
                (Some(key), Some(value)) => TypeShape::Mapping {
                    key: text(&key, source).to_string(),
                    value: text(&value, source).to_string(),
                },
                _ => unsupported(ty, source),
            },
            "pointer_type" => match ty.named_children(&mut ty.walk()).next() {
                Some(referent) => TypeShape::Indirection(text(&referent, source).to_string()),
                None => unsupported(ty, source),
            },
            _ => unsupported(ty, source),
        }
    }

    /// Display signature, or `None` for unsupported shapes.
    pub fn signature(&self) -> Option<String> {
        match self {
            TypeShape::Named(name) => Some(name.clone()),
            TypeShape::Sequence(element) => Some(format!("[]{}", element)),
            TypeShape::Mapping { key, value } => Some(format!("map[{}]{}", key, value)),
            TypeShape::Indirection(referent) => Some(referent.clone()),
            TypeShape::Embedded { composite } => Some(composite.clone()),
            TypeShape::Unsupported { .. } => None,
        }
    }
}

fn unsupported(ty: Node, source: &str) -> TypeShape {
    TypeShape::Unsupported {
        kind: ty.kind().to_string(),
        text: text(&ty, source).to_string(),
    }
}
