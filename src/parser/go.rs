//! Struct documentation extraction from a parsed Go file.
//!
//! Walks the top-level declarations in source order:
//!
//! - a `type` spec inside `type ( ... )` owns the comment right above it
//! - a lone `type X struct` owns its declaration's comment
//! - every documented `type`/`const`/`var` declaration also feeds the
//!   probable-name map: the comment's first word is taken as a type name.
//!   A struct with no comment of its own falls back to that map. This is a
//!   heuristic tuned to comment blocks like `// LogLevel values ...` sitting
//!   above a const group; it only sees declarations earlier in the file.
//!
//! Only structs that are the direct body of a type spec are recorded.
//! Fields without a doc comment are dropped.

use crate::error::ScanError;
use crate::model::{FieldDef, TypeDef, TypeIndex};
use crate::parser::comment::{doc_comment, text};
use crate::parser::signature::TypeShape;
use crate::parser::ParsedFile;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;
use tree_sitter::Node;

static RE_DEFAULT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^default: (.*)$").unwrap());

/// Extract every documented struct in `file` into `index`.
pub fn extract(file: &ParsedFile, index: &mut TypeIndex) -> Result<(), ScanError> {
    let source = file.source.as_str();
    let root = file.tree.root_node();
    let top: Vec<Node> = root.children(&mut root.walk()).collect();

    // Probable type name -> comment text
    let mut probable: HashMap<String, String> = HashMap::new();

    for (i, decl) in top.iter().enumerate() {
        let kind = decl.kind();
        if !matches!(kind, "type_declaration" | "const_declaration" | "var_declaration") {
            continue;
        }

        let decl_doc = doc_comment(&top, i, source);
        if let Some(name) = probable_name(&decl_doc) {
            debug!(name, kind, "probable type name from declaration comment");
            probable.insert(name.to_string(), decl_doc.clone());
        }

        if kind != "type_declaration" {
            continue;
        }

        let parts: Vec<Node> = decl.children(&mut decl.walk()).collect();
        let grouped = parts.iter().any(|n| n.kind() == "(");

        for (j, spec) in parts.iter().enumerate() {
            if !matches!(spec.kind(), "type_spec" | "type_alias") {
                continue;
            }
            let own_doc = if grouped {
                doc_comment(&parts, j, source)
            } else {
                decl_doc.clone()
            };
            if let Some(ty) = extract_struct(file, *spec, own_doc, &probable)? {
                index.insert(ty)?;
            }
        }
    }

    Ok(())
}

/// The candidate type name of a declaration comment: the text before its
/// first space, when that is non-empty.
pub fn probable_name(doc: &str) -> Option<&str> {
    match doc.find(' ') {
        Some(pos) if pos > 0 => Some(&doc[..pos]),
        _ => None,
    }
}

/// The first `default: ` line of a doc comment, case-insensitive.
pub fn default_value(doc: &str) -> String {
    doc.lines()
        .find_map(|line| RE_DEFAULT.captures(line).map(|caps| caps[1].to_string()))
        .unwrap_or_default()
}

fn extract_struct(
    file: &ParsedFile,
    spec: Node,
    own_doc: String,
    probable: &HashMap<String, String>,
) -> Result<Option<TypeDef>, ScanError> {
    let source = file.source.as_str();
    let (Some(name_node), Some(body)) = (
        spec.child_by_field_name("name"),
        spec.child_by_field_name("type"),
    ) else {
        return Ok(None);
    };
    if body.kind() != "struct_type" {
        return Ok(None);
    }

    let name = text(&name_node, source).to_string();
    let doc = if own_doc.is_empty() {
        probable.get(&name).cloned().unwrap_or_default()
    } else {
        own_doc
    };

    let mut fields = Vec::new();
    let list = body
        .named_children(&mut body.walk())
        .find(|n| n.kind() == "field_declaration_list");
    if let Some(list) = list {
        let members: Vec<Node> = list.children(&mut list.walk()).collect();
        for (k, member) in members.iter().enumerate() {
            if member.kind() != "field_declaration" {
                continue;
            }
            let doc = doc_comment(&members, k, source);
            if doc.is_empty() {
                continue;
            }
            fields.push(extract_field(file, *member, doc)?);
        }
    }

    debug!(name = %name, fields = fields.len(), path = %file.path.display(), "struct");
    Ok(Some(TypeDef {
        name,
        doc,
        fields,
        source: file.path.clone(),
    }))
}

fn extract_field(file: &ParsedFile, member: Node, doc: String) -> Result<FieldDef, ScanError> {
    let source = file.source.as_str();
    // Only the first of `A, B int` is kept
    let name = member
        .child_by_field_name("name")
        .map(|n| text(&n, source).to_string())
        .unwrap_or_default();
    let line = member.start_position().row + 1;

    let Some(ty) = member.child_by_field_name("type") else {
        return Err(ScanError::UnsupportedShape {
            path: file.path.clone(),
            line,
            field: name,
            kind: "missing".to_string(),
            text: text(&member, source).to_string(),
        });
    };

    let shape = TypeShape::classify(ty, name.is_empty(), source);
    let Some(type_sig) = shape.signature() else {
        let (kind, shape_text) = match shape {
            TypeShape::Unsupported { kind, text } => (kind, text),
            _ => (ty.kind().to_string(), text(&ty, source).to_string()),
        };
        return Err(ScanError::UnsupportedShape {
            path: file.path.clone(),
            line,
            field: name,
            kind,
            text: shape_text,
        });
    };

    let composite = match shape {
        TypeShape::Embedded { composite } => composite,
        _ => String::new(),
    };

    Ok(FieldDef {
        name,
        composite,
        type_sig,
        default_value: default_value(&doc),
        doc,
    })
}
