use clap::{Args, Parser, Subcommand};
use rwloc_core::Level;

/// CLI arguments for rwloc
#[derive(Debug, Parser)]
#[command(
    name = "rwloc",
    version,
    about = "CLI for querying Rwanda's administrative divisions (province to village)"
)]
pub struct CliArgs {
    /// Path to the dataset JSON (or .json.gz) file (default: bundled locations.json)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Reject datasets whose codes map to more than one parent
    #[arg(long = "strict", global = true)]
    pub strict: bool,

    /// Print JSON instead of one line per item
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show how many distinct entities each level holds
    Stats {
        /// Only print the count for one level (province, district, sector, cell, village)
        #[arg(long)]
        level: Option<Level>,
    },

    /// List all provinces
    Provinces,

    /// Lookup a province by numeric code or by name (case-insensitive)
    Province {
        /// Province code (e.g. 1) or name (e.g. kigali)
        key: String,
    },

    /// List districts, optionally within one province
    Districts {
        #[arg(long)]
        province: Option<u32>,
    },

    /// List sectors, optionally within a district and/or province
    Sectors {
        #[arg(long)]
        district: Option<u32>,
        #[arg(long)]
        province: Option<u32>,
    },

    /// List cells, optionally within a sector, district and/or province
    Cells {
        #[arg(long)]
        sector: Option<String>,
        #[arg(long)]
        district: Option<u32>,
        #[arg(long)]
        province: Option<u32>,
    },

    /// List villages, optionally within a cell, sector, district and/or province
    Villages {
        #[arg(long)]
        cell: Option<u32>,
        #[arg(long)]
        sector: Option<String>,
        #[arg(long)]
        district: Option<u32>,
        #[arg(long)]
        province: Option<u32>,
    },

    /// Show the full province-to-village path of a village
    Village {
        /// Village code (e.g. 101010102)
        code: u32,
    },

    /// Search every name level for a literal substring
    Search {
        /// Substring to look for
        term: String,

        /// Match case exactly instead of ignoring it
        #[arg(long)]
        case_sensitive: bool,

        /// Return at most N records
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Filter records by any combination of codes and names
    Query(QueryArgs),
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    #[arg(long)]
    pub province_code: Option<u32>,
    #[arg(long)]
    pub province_name: Option<String>,
    #[arg(long)]
    pub district_code: Option<u32>,
    #[arg(long)]
    pub district_name: Option<String>,
    #[arg(long)]
    pub sector_code: Option<String>,
    #[arg(long)]
    pub sector_name: Option<String>,
    #[arg(long)]
    pub cell_code: Option<u32>,
    #[arg(long)]
    pub cell_name: Option<String>,
    #[arg(long)]
    pub village_code: Option<u32>,
    #[arg(long)]
    pub village_name: Option<String>,
}

impl From<QueryArgs> for rwloc_core::QueryFilter {
    fn from(a: QueryArgs) -> Self {
        rwloc_core::QueryFilter {
            province_code: a.province_code,
            province_name: a.province_name,
            district_code: a.district_code,
            district_name: a.district_name,
            sector_code: a.sector_code,
            sector_name: a.sector_name,
            cell_code: a.cell_code,
            cell_name: a.cell_name,
            village_code: a.village_code,
            village_name: a.village_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let args = CliArgs::parse_from(["rwloc", "districts", "--province", "1", "--json"]);
        assert!(args.json);
        assert!(matches!(
            args.command,
            Commands::Districts { province: Some(1) }
        ));
    }

    #[test]
    fn parses_level_for_stats() {
        let args = CliArgs::parse_from(["rwloc", "stats", "--level", "Village"]);
        assert!(matches!(
            args.command,
            Commands::Stats {
                level: Some(Level::Village)
            }
        ));
        assert!(CliArgs::try_parse_from(["rwloc", "stats", "--level", "planet"]).is_err());
    }

    #[test]
    fn query_flags_become_filter() {
        let args = CliArgs::parse_from([
            "rwloc",
            "query",
            "--province-code",
            "0",
            "--sector-code",
            "",
        ]);
        let Commands::Query(q) = args.command else {
            panic!("expected query");
        };
        let filter = rwloc_core::QueryFilter::from(q);
        assert_eq!(filter.province_code, Some(0));
        assert_eq!(filter.sector_code.as_deref(), Some(""));
        assert!(filter.district_code.is_none());
    }
}
