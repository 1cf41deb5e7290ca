//! Assembly of the configuration reference document.
//!
//! Layout, in order: preamble, one grouped table over the core config
//! structs, illustrative examples, one section per standalone struct, and the
//! GeoIP country struct from its own package.

use crate::model::{TypeDef, TypeIndex};
use crate::render::{render_type, ColumnWidths, RenderOptions};
use tracing::warn;

const PREAMBLE: &str = "# Configuration
See [gochan.example.json](examples/configs/gochan.example.json) for an example gochan.json.

**Make sure gochan has read-write permission for `DocumentRoot` and `LogDir` and read permission for `TemplateDir`**

Fields in the table marked as board options can be overridden on individual boards by adding them to  board.json, which gochan looks for in the board directory or in the same directory as gochan.json.

";

const EXAMPLES: &str = "
Example options for `GeoIPOptions`:
```JSONC
\"GeoIPType\": \"mmdb\",
\"GeoIPOptions\": {
\t\"dbLocation\": \"/usr/share/geoip/GeoIP2.mmdb\",
\t\"isoCode\": \"en\" // optional
}
```

`CustomFlags` is an array with custom post flags, selectable via dropdown. The `Flag` value is assumed to be a file in /static/flags/. Example:
```JSON
\"CustomFlags\": [
\t{\"Flag\":\"california.png\", \"Name\": \"California\"},
\t{\"Flag\":\"cia.png\", \"Name\": \"CIA\"},
\t{\"Flag\":\"lgbtq.png\", \"Name\": \"LGBTQ\"},
\t{\"Flag\":\"ms-dos.png\", \"Name\": \"MS-DOS\"},
\t{\"Flag\":\"stallman.png\", \"Name\": \"Stallman\"},
\t{\"Flag\":\"templeos.png\", \"Name\": \"TempleOS\"},
\t{\"Flag\":\"tux.png\", \"Name\": \"Linux\"},
\t{\"Flag\":\"windows9x.png\", \"Name\": \"Windows 9x\"}
]
```

";

/// What goes into the document and where it is read from.
#[derive(Debug, Clone)]
pub struct DocumentPlan {
    pub preamble: &'static str,
    /// Rendered as one table under a shared header, in this order
    pub grouped: &'static [&'static str],
    /// Grouped types whose settings can be overridden per board
    pub board_overridable: &'static [&'static str],
    pub examples: &'static str,
    /// Rendered as individual sections, in this order
    pub named: &'static [&'static str],
    /// Directory holding the config structs, relative to the project root
    pub config_dir: &'static str,
    /// Directory holding the auxiliary struct, relative to the project root
    pub aux_dir: &'static str,
    pub aux_type: &'static str,
    /// Heading used for the auxiliary struct
    pub aux_display_name: &'static str,
}

impl Default for DocumentPlan {
    fn default() -> Self {
        DocumentPlan {
            preamble: PREAMBLE,
            grouped: &[
                "SystemCriticalConfig",
                "SQLConfig",
                "SiteConfig",
                "BoardConfig",
                "PostConfig",
                "UploadConfig",
            ],
            board_overridable: &["BoardConfig", "PostConfig", "UploadConfig"],
            examples: EXAMPLES,
            named: &["CaptchaConfig", "PageBanner", "BoardCooldowns"],
            config_dir: "pkg/config",
            aux_dir: "pkg/posting/geoip",
            aux_type: "Country",
            aux_display_name: "geoip.Country",
        }
    }
}

impl DocumentPlan {
    pub fn is_board_overridable(&self, name: &str) -> bool {
        self.board_overridable.contains(&name)
    }
}

/// Look up `name`, falling back to an empty placeholder so layout still
/// proceeds.
fn lookup_or_empty(index: &TypeIndex, name: &str) -> TypeDef {
    match index.get(name) {
        Some(ty) => ty.clone(),
        None => {
            warn!(name, "type not found, rendering it empty");
            TypeDef::named(name)
        }
    }
}

/// Build the full document from the two scans.
pub fn assemble(plan: &DocumentPlan, config: &TypeIndex, aux: &TypeIndex) -> String {
    let mut out = String::new();
    out.push_str(plan.preamble);

    // One layout over the whole group keeps every slice aligned
    let grouped: Vec<TypeDef> = plan
        .grouped
        .iter()
        .map(|name| lookup_or_empty(config, name))
        .collect();
    let widths = ColumnWidths::compute(&grouped);
    for (i, ty) in grouped.iter().enumerate() {
        let options = RenderOptions::grouped(i == 0, plan.is_board_overridable(&ty.name));
        render_type(&mut out, ty, &widths, options);
    }

    out.push_str(plan.examples);

    for name in plan.named {
        let Some(ty) = config.get(name) else {
            warn!(name, "type not found, skipping its section");
            continue;
        };
        let widths = ColumnWidths::compute([ty]);
        render_type(&mut out, ty, &widths, RenderOptions::named());
        out.push('\n');
    }

    let mut aux_ty = lookup_or_empty(aux, plan.aux_type);
    aux_ty.name = plan.aux_display_name.to_string();
    let widths = ColumnWidths::compute([&aux_ty]);
    render_type(&mut out, &aux_ty, &widths, RenderOptions::named());

    out
}
