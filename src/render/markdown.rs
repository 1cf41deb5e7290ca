//! Markdown tables for documented config structs.
//!
//! Grouped tables share one header across several types, so every row is
//! padded to the batch's [`ColumnWidths`] rather than its own contents.

use crate::model::{FieldDef, TypeDef};
use crate::render::layout::{ColumnWidths, TableLayout};

/// Fields whose doc contains this marker are left out of the table.
pub const DEPRECATED_MARKER: &str = "Deprecated:";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Emit a `## Name` heading and the type's doc. Named tables have no
    /// board option column.
    pub named: bool,
    pub show_header: bool,
    /// Value of the board option column for every row of this type
    pub board_overridable: bool,
}

impl RenderOptions {
    /// A standalone section with its own heading and header row.
    pub fn named() -> Self {
        RenderOptions {
            named: true,
            show_header: true,
            board_overridable: false,
        }
    }

    /// One slice of a grouped table.
    pub fn grouped(show_header: bool, board_overridable: bool) -> Self {
        RenderOptions {
            named: false,
            show_header,
            board_overridable,
        }
    }
}

/// Append the table for `ty` to `out`.
pub fn render_type(out: &mut String, ty: &TypeDef, widths: &ColumnWidths, options: RenderOptions) {
    if options.named {
        out.push_str("## ");
        out.push_str(&ty.name);
        out.push('\n');
        out.push_str(&ty.doc);
    }

    let board_column = !options.named;
    let layout = TableLayout::new(widths, board_column);

    if options.show_header {
        let mut header = vec!["Field", "Type"];
        if board_column {
            header.push("Board option");
        }
        if widths.has_default() {
            header.push("Default");
        }
        header.push("Info");
        out.push_str(&layout.format_row(&header));
        out.push_str(&layout.separator());
    }

    let board = if options.board_overridable { "Yes" } else { "No" };
    for field in ty.fields.iter().filter(|f| !is_deprecated(f)) {
        let doc = field.doc.replace('\n', " ");
        let mut cells = vec![field.name.as_str(), field.type_sig.as_str()];
        if board_column {
            cells.push(board);
        }
        if widths.has_default() {
            cells.push(field.default_value.as_str());
        }
        cells.push(&doc);
        debug_assert_eq!(cells.len(), layout.columns());
        out.push_str(&layout.format_row(&cells));
    }
}

pub fn is_deprecated(field: &FieldDef) -> bool {
    field.doc.contains(DEPRECATED_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, type_sig: &str, doc: &str) -> FieldDef {
        FieldDef {
            name: name.to_string(),
            type_sig: type_sig.to_string(),
            default_value: crate::parser::go::default_value(doc),
            doc: doc.to_string(),
            ..Default::default()
        }
    }

    fn example() -> TypeDef {
        TypeDef {
            name: "Example".to_string(),
            doc: "Example config.\n".to_string(),
            fields: vec![field("Port", "int", "Default: 8080\nThe listen port.")],
            ..Default::default()
        }
    }

    fn render(ty: &TypeDef, widths: &ColumnWidths, options: RenderOptions) -> String {
        let mut out = String::new();
        render_type(&mut out, ty, widths, options);
        out
    }

    #[test]
    fn named_table_with_default_column() {
        let ty = example();
        let widths = ColumnWidths::compute([&ty]);
        let out = render(&ty, &widths, RenderOptions::named());
        assert_eq!(
            out,
            "## Example\n\
             Example config.\n\
             Field  |Type  |Default    |Info\n\
             -------|------|-----------|--------------\n\
             Port   |int   |8080       |Default: 8080 The listen port.\n"
        );
    }

    #[test]
    fn no_default_column_without_defaults() {
        let ty = TypeDef {
            name: "Plain".to_string(),
            fields: vec![field("Name", "string", "The name")],
            ..Default::default()
        };
        let widths = ColumnWidths::compute([&ty]);
        let out = render(&ty, &widths, RenderOptions::named());
        assert!(!out.contains("Default"));
        assert!(out.contains("Name   |string |The name\n"));
    }

    #[test]
    fn empty_doc_is_not_written() {
        let mut ty = example();
        ty.doc.clear();
        let widths = ColumnWidths::compute([&ty]);
        let out = render(&ty, &widths, RenderOptions::named());
        assert!(out.starts_with("## Example\nField  |"));
    }

    #[test]
    fn deprecated_fields_are_hidden_but_sized() {
        let ty = TypeDef {
            name: "T".to_string(),
            fields: vec![
                field("Current", "string", "Used"),
                field("VeryLongRetiredName", "string", "Deprecated: use Current"),
            ],
            ..Default::default()
        };
        let widths = ColumnWidths::compute([&ty]);
        assert_eq!(widths.field, 19);
        let out = render(&ty, &widths, RenderOptions::named());
        assert!(!out.contains("VeryLongRetiredName"));
        assert!(out.contains(&format!("{:<20}|", "Current")));
    }

    #[test]
    fn grouped_rows_carry_board_flag() {
        let site = TypeDef {
            name: "SiteConfig".to_string(),
            fields: vec![field("SiteName", "string", "Name of the site")],
            ..Default::default()
        };
        let board = TypeDef {
            name: "BoardConfig".to_string(),
            fields: vec![field("MaxLines", "int", "Default: 100\nLines shown")],
            ..Default::default()
        };
        let widths = ColumnWidths::compute([&site, &board]);

        let mut out = String::new();
        render_type(&mut out, &site, &widths, RenderOptions::grouped(true, false));
        render_type(&mut out, &board, &widths, RenderOptions::grouped(false, true));

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Field    |Type   |Board option |Default    |Info");
        assert_eq!(lines[2], "SiteName |string |No           |           |Name of the site");
        assert_eq!(lines[3], "MaxLines |int    |Yes          |100        |Default: 100 Lines shown");
    }

    #[test]
    fn grouped_without_header_emits_rows_only() {
        let ty = example();
        let widths = ColumnWidths::compute([&ty]);
        let out = render(&ty, &widths, RenderOptions::grouped(false, false));
        assert!(out.starts_with("Port   |int   |No           |8080       |"));
        assert_eq!(out.lines().count(), 1);
    }
}
