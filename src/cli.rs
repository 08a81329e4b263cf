use clap::Parser;
use std::path::PathBuf;

use crate::adapters::outbound::formatters::DisplayOptions;
use crate::application::dto::{OutputFormat, ScanRequest};
use crate::config::ConfigFile;
use crate::lockfile_scan::policies::MetadataSelection;
use crate::lockfile_scan::services::FilterConfig;

pub const DEFAULT_LOCKFILE: &str = "package-lock.json";

/// Scan a package-lock.json for known-compromised npm packages
#[derive(Parser, Debug)]
#[command(name = "scnpm")]
#[command(version)]
#[command(
    about = "Scan a package-lock.json for known-compromised npm packages",
    long_about = None
)]
pub struct Args {
    /// A JSON file of "name@version" strings, followed by NAME@VERSION queries
    #[arg(value_name = "QUERY")]
    pub queries: Vec<String>,

    /// Path to package-lock.json [default: package-lock.json]
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Comma-separated NAME@VERSION list (can be repeated)
    #[arg(short = 'p', long, value_name = "LIST", value_delimiter = ',')]
    pub packages: Vec<String>,

    /// JSON array file of NAME@VERSION strings
    #[arg(long, value_name = "PATH")]
    pub packages_file: Option<PathBuf>,

    /// Output format: table or json [default: table]
    #[arg(short = 'o', long, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Path to config file (default: auto-discover scnpm.config.yml)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only report packages installed as dev dependencies
    #[arg(long)]
    pub dev_only: bool,

    /// Only report nested (non top-level) installs
    #[arg(long)]
    pub nested_only: bool,

    /// Only report instances at or below this nesting depth
    #[arg(long, value_name = "N")]
    pub min_depth: Option<usize>,

    /// Hide packages that were not found
    #[arg(long)]
    pub risk_only: bool,

    /// Show packages that were not found [default: true]
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub show_safe: Option<bool>,

    /// Also report dependency ranges that mention a package [default: true]
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub search_in_deps: Option<bool>,

    /// Include resolved URL, integrity and license in JSON output
    #[arg(long)]
    pub metadata: bool,

    /// Include dependencies and peerDependencies in JSON output
    #[arg(long)]
    pub show_deps: bool,

    /// Include engines, bin and scripts in JSON output
    #[arg(long)]
    pub show_engines: bool,
}

/// Everything a run needs once CLI and config are merged
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub request: ScanRequest,
    pub format: OutputFormat,
    pub display: DisplayOptions,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Merges the parsed arguments with an optional config file.
    ///
    /// Explicit CLI values win; plain switches are enabled if either side
    /// enables them; query sources from the config come first.
    pub fn into_settings(self, config: Option<&ConfigFile>) -> RunSettings {
        let default_config = ConfigFile::default();
        let config = config.unwrap_or(&default_config);
        let enabled = |cli: bool, file: Option<bool>| cli || file.unwrap_or(false);

        let lockfile_path = self
            .file
            .or_else(|| config.lockfile.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOCKFILE));

        let mut request = ScanRequest::new(lockfile_path);

        if let Some(path) = &config.packages_file {
            request = request.with_query_file(path.clone());
        }
        if let Some(packages) = &config.packages {
            request = request.with_queries(packages.iter().cloned());
        }

        let mut positionals = self.queries.into_iter().peekable();
        if let Some(first) = positionals.next_if(|q| q.ends_with(".json")) {
            request = request.with_query_file(first);
        }
        if let Some(path) = self.packages_file {
            request = request.with_query_file(path);
        }
        request = request.with_queries(self.packages).with_queries(positionals);

        let filter = FilterConfig {
            dev_only: enabled(self.dev_only, config.dev_only),
            nested_only: enabled(self.nested_only, config.nested_only),
            min_depth: self.min_depth.or(config.min_depth).unwrap_or(0),
        };
        let metadata = MetadataSelection {
            registry: enabled(self.metadata, config.metadata),
            dependencies: enabled(self.show_deps, config.show_deps),
            technical: enabled(self.show_engines, config.show_engines),
        };
        let search_in_deps = self.search_in_deps.or(config.search_in_deps).unwrap_or(true);

        let display = DisplayOptions {
            show_safe: self.show_safe.or(config.show_safe).unwrap_or(true),
            risk_only: enabled(self.risk_only, config.risk_only),
        };

        RunSettings {
            request: request
                .with_filter(filter)
                .with_metadata(metadata)
                .with_search_in_deps(search_in_deps),
            format: self
                .output
                .or_else(|| config.output_format())
                .unwrap_or_default(),
            display,
        }
    }
}
