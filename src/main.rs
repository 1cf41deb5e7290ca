//! cfgdoc: generate the configuration reference from documented Go structs.
//!
//! Scans `<root>/pkg/config` and `<root>/pkg/posting/geoip`, pulls the doc
//! comments off the config structs and their fields, and prints a markdown
//! document of column-aligned tables:
//!
//! ```text
//! cfgdoc /path/to/gochan > config.md
//! ```

mod document;
mod error;
mod logging;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "cfgdoc",
    about = "Generate configuration reference tables from documented Go structs"
)]
struct Cli {
    /// Root of the project to document
    root: PathBuf,

    /// Write the document to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    let plan = document::DocumentPlan::default();

    let config_types = scan(&cli.root.join(plan.config_dir))?;
    let aux_types = scan(&cli.root.join(plan.aux_dir))?;

    let doc = document::assemble(&plan, &config_types, &aux_types);

    match cli.output {
        Some(path) => {
            fs::write(&path, format!("{}\n", doc))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote document");
        }
        None => println!("{}", doc),
    }
    Ok(())
}

/// Scan one package directory, naming it in any error.
fn scan(dir: &Path) -> Result<model::TypeIndex> {
    let types = parser::scan_types(dir)
        .with_context(|| format!("error scanning package in {}", dir.display()))?;
    info!(dir = %dir.display(), types = types.len(), "scanned package");
    Ok(types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_requires_exactly_one_root() {
        assert!(Cli::try_parse_from(["cfgdoc"]).is_err());
        assert!(Cli::try_parse_from(["cfgdoc", "a", "b"]).is_err());
        let cli = Cli::try_parse_from(["cfgdoc", "/src/gochan"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("/src/gochan"));
        assert!(cli.output.is_none());
    }

    #[test]
    fn cli_output_flag() {
        let cli = Cli::try_parse_from(["cfgdoc", "-o", "out.md", "root"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.md")));
    }
}
