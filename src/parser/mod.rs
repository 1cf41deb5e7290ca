//! Source tree scanning: walk, filter, read and parse Go files.

pub mod comment;
pub mod go;
pub mod signature;

use crate::error::ScanError;
use crate::model::TypeIndex;
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tree_sitter::{Node, Parser, Tree};
use walkdir::WalkDir;

/// File names eligible for scanning.
const SOURCE_PATTERN: &str = "*.go";
/// File names excluded even when they match [`SOURCE_PATTERN`].
const TEST_PATTERN: &str = "*_test.go";

/// One source file with its syntax tree.
pub struct ParsedFile {
    pub path: PathBuf,
    pub source: String,
    pub tree: Tree,
}

/// Walks a directory and parses every eligible file.
///
/// A single tree-sitter parser is reused across files.
pub struct SourceScanner {
    include: Pattern,
    exclude: Pattern,
    parser: Parser,
}

impl SourceScanner {
    pub fn new() -> Result<Self, ScanError> {
        Self::with_patterns(SOURCE_PATTERN, TEST_PATTERN)
    }

    pub fn with_patterns(include: &str, exclude: &str) -> Result<Self, ScanError> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::LANGUAGE.into())?;
        Ok(SourceScanner {
            include: Pattern::new(include)?,
            exclude: Pattern::new(exclude)?,
            parser,
        })
    }

    /// Whether a file name selects the file for parsing.
    pub fn is_eligible(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.include.matches(name) && !self.exclude.matches(name)
    }

    /// Parse every eligible regular file under `root`, recursively.
    ///
    /// The first walk, read or parse failure aborts the scan.
    pub fn scan(&mut self, root: &Path) -> Result<Vec<ParsedFile>, ScanError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|source| ScanError::Walk {
                path: source.path().unwrap_or(root).to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_file() || !self.is_eligible(entry.path()) {
                continue;
            }

            let path = entry.path();
            let source = fs::read_to_string(path).map_err(|source| ScanError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            files.push(self.parse(path, source)?);
        }
        Ok(files)
    }

    /// Parse one file's contents. Trees with syntax errors are rejected.
    pub fn parse(&mut self, path: &Path, source: String) -> Result<ParsedFile, ScanError> {
        debug!(path = %path.display(), "parsing");
        let Some(tree) = self.parser.parse(&source, None) else {
            return Err(ScanError::Parse {
                path: path.to_path_buf(),
                line: 0,
                column: 0,
            });
        };

        if let Some(bad) = first_error(tree.root_node()) {
            let at = bad.start_position();
            return Err(ScanError::Parse {
                path: path.to_path_buf(),
                line: at.row + 1,
                column: at.column + 1,
            });
        }

        Ok(ParsedFile {
            path: path.to_path_buf(),
            source,
            tree,
        })
    }
}

/// First ERROR or MISSING node in document order.
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let children: Vec<Node> = node.children(&mut node.walk()).collect();
    children.into_iter().find_map(first_error)
}

/// Scan `root` and collect its documented structs.
pub fn scan_types(root: &Path) -> Result<TypeIndex, ScanError> {
    let mut scanner = SourceScanner::new()?;
    let files = scanner.scan(root)?;

    let mut index = TypeIndex::default();
    for file in &files {
        go::extract(file, &mut index)?;
    }
    debug!(root = %root.display(), files = files.len(), types = index.len(), "scan complete");
    Ok(index)
}
