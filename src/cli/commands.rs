// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// The converter takes one required input, two optional
// positional inputs and a required output flag:
//
//   paper-csv <base_paper> [qualified] [disqualified] -o <output>
//
// clap's derive macros generate --help, --version and the
// error messages for a missing base_paper or -o.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::Args;
use std::path::PathBuf;

use crate::application::convert_use_case::ConvertConfig;

/// Arguments of a conversion run
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Master paper YAML (with `papers: [...]`)
    pub base_paper: PathBuf,

    /// Qualified papers YAML (optional)
    pub qualified: Option<String>,

    /// Disqualified papers YAML (optional)
    pub disqualified: Option<String>,

    /// Output CSV filename
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Convert CLI arguments into the application-layer config.
/// An empty path argument counts as not supplied.
impl From<ConvertArgs> for ConvertConfig {
    fn from(a: ConvertArgs) -> Self {
        ConvertConfig {
            base_paper:   a.base_paper,
            qualified:    non_empty(a.qualified),
            disqualified: non_empty(a.disqualified),
            output:       a.output,
        }
    }
}

fn non_empty(path: Option<String>) -> Option<PathBuf> {
    path.filter(|p| !p.is_empty()).map(PathBuf::from)
}
