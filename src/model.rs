//! Data model for extracted type documentation.

use crate::error::ScanError;
use std::collections::HashMap;
use std::path::PathBuf;

/// A documented struct type.
#[derive(Debug, Default, Clone)]
pub struct TypeDef {
    pub name: String,
    pub doc: String,
    /// Documented fields, in declaration order
    pub fields: Vec<FieldDef>,
    /// File the declaration was found in
    pub source: PathBuf,
}

impl TypeDef {
    /// An empty placeholder carrying only a name.
    pub fn named(name: &str) -> Self {
        TypeDef {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

/// One documented member of a [`TypeDef`].
#[derive(Debug, Default, Clone)]
pub struct FieldDef {
    /// Empty for embedded members
    pub name: String,
    /// Embedded type identifier, empty for named fields
    #[allow(dead_code)]
    pub composite: String,
    pub type_sig: String,
    /// Value from the first `Default: ` line of the doc
    pub default_value: String,
    pub doc: String,
}

/// All types found by one scan, keyed by name.
#[derive(Debug, Default)]
pub struct TypeIndex {
    types: HashMap<String, TypeDef>,
}

impl TypeIndex {
    /// Insert a type. A name already declared in another file is an error;
    /// within the same file the later declaration replaces the earlier one.
    pub fn insert(&mut self, ty: TypeDef) -> Result<(), ScanError> {
        if let Some(existing) = self.types.get(&ty.name) {
            if existing.source != ty.source {
                return Err(ScanError::DuplicateType {
                    name: ty.name,
                    first: existing.source.clone(),
                    second: ty.source,
                });
            }
        }
        self.types.insert(ty.name.clone(), ty);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(name: &str, source: &str) -> TypeDef {
        TypeDef {
            name: name.to_string(),
            source: PathBuf::from(source),
            ..Default::default()
        }
    }

    #[test]
    fn same_file_redeclaration_replaces() {
        let mut index = TypeIndex::default();
        index.insert(ty("A", "a.go")).unwrap();
        let mut second = ty("A", "a.go");
        second.doc = "second\n".to_string();
        index.insert(second).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("A").unwrap().doc, "second\n");
    }

    #[test]
    fn cross_file_collision_is_reported() {
        let mut index = TypeIndex::default();
        index.insert(ty("A", "a.go")).unwrap();
        let err = index.insert(ty("A", "sub/a.go")).unwrap_err();
        assert!(matches!(err, ScanError::DuplicateType { ref name, .. } if name == "A"));
        assert!(err.to_string().contains("sub/a.go"));
    }

    #[test]
    fn named_placeholder_is_empty() {
        let t = TypeDef::named("Missing");
        assert_eq!(t.name, "Missing");
        assert!(t.doc.is_empty());
        assert!(t.fields.is_empty());
    }
}
