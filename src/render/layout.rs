//! Column widths shared by every table in a rendering batch.

use crate::model::TypeDef;

const MIN_FIELD: usize = 6;
const MIN_TYPE: usize = 5;
const MIN_DOC: usize = 4;
/// Floor for the default column once any default is present.
const MIN_DEFAULT: usize = 8;

/// Width of the "Board option" column, `Yes`/`No` included.
pub const BOARD_WIDTH: usize = 13;
/// Dashes under the last (unpadded) column.
const INFO_RULE: usize = 14;

/// Maximum content lengths per column across a batch of types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub field: usize,
    pub type_sig: usize,
    /// Zero when no field in the batch has a default
    pub default: usize,
    pub doc: usize,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        ColumnWidths {
            field: MIN_FIELD,
            type_sig: MIN_TYPE,
            default: 0,
            doc: MIN_DOC,
        }
    }
}

impl ColumnWidths {
    /// Compute widths over every field of every type in `batch`.
    ///
    /// Deprecated fields count even though they are never rendered.
    pub fn compute<'a, I>(batch: I) -> Self
    where
        I: IntoIterator<Item = &'a TypeDef>,
    {
        let mut widths = ColumnWidths::default();
        for field in batch.into_iter().flat_map(|ty| &ty.fields) {
            widths.field = widths.field.max(display_len(&field.name));
            widths.type_sig = widths.type_sig.max(display_len(&field.type_sig));
            widths.default = widths.default.max(display_len(&field.default_value));
            widths.doc = widths.doc.max(display_len(&field.doc));
        }
        if widths.default > 0 && widths.default < MIN_DEFAULT {
            widths.default = MIN_DEFAULT;
        }
        widths
    }

    pub fn has_default(&self) -> bool {
        self.default > 0
    }
}

fn display_len(s: &str) -> usize {
    s.chars().count()
}

/// Right-pad `s` with spaces to `width` characters. Longer text is kept whole.
pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Concrete cell widths for one table shape.
///
/// Every column but the last is padded; cells are joined with `|`.
#[derive(Debug, Clone)]
pub struct TableLayout {
    padded: Vec<usize>,
}

impl TableLayout {
    pub fn new(widths: &ColumnWidths, board_column: bool) -> Self {
        let mut padded = vec![widths.field + 1, widths.type_sig + 1];
        if board_column {
            padded.push(BOARD_WIDTH);
        }
        if widths.has_default() {
            padded.push(widths.default + 3);
        }
        TableLayout { padded }
    }

    /// Number of cells a row must provide.
    pub fn columns(&self) -> usize {
        self.padded.len() + 1
    }

    /// Format one row, newline included.
    pub fn format_row(&self, cells: &[&str]) -> String {
        let mut row = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| match self.padded.get(i) {
                Some(&width) => pad_right(cell, width),
                None => cell.to_string(),
            })
            .collect::<Vec<_>>()
            .join("|");
        row.push('\n');
        row
    }

    /// The `---|---` row under the header.
    pub fn separator(&self) -> String {
        let mut row = self
            .padded
            .iter()
            .chain(std::iter::once(&INFO_RULE))
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("|");
        row.push('\n');
        row
    }
}
