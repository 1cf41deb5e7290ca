//! Table rendering: shared column layout plus the markdown writer.

pub mod layout;
pub mod markdown;

pub use layout::ColumnWidths;
pub use markdown::{render_type, RenderOptions};
