pub mod add;
pub mod delete;
pub mod list;
pub mod rates;
pub mod ui;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use shipbox_common::config::{Config, DEFAULT_DATA_DIR, DEFAULT_DEBOUNCE};
use shipbox_common::shipping::country::Country;
use shipbox_core::listing::{CountryFilter, SortField};

#[derive(Parser)]
#[command(name = "shipbox")]
#[command(about = "Record shipping boxes and what they cost to send.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the saved box list
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Keep boxes in memory only, nothing is saved
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Hide the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce decoration, repeat for results only
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Milliseconds of typing pause before the list search applies
    #[arg(long, global = true, default_value_t = DEFAULT_DEBOUNCE.as_millis() as u64)]
    pub debounce_ms: u64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a new box
    #[command(alias = "a")]
    Add {
        /// Name of the receiver
        #[arg(short, long, default_value = "")]
        receiver: String,
        /// Weight in kilograms
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        weight: String,
        /// Box color as #rrggbb
        #[arg(short, long)]
        color: Option<String>,
        /// Destination country
        #[arg(short = 'd', long, default_value = "Sweden")]
        country: Country,
    },
    /// Show the recorded boxes
    #[command(alias = "l")]
    List {
        /// Only boxes whose receiver or destination contains this text
        #[arg(short, long, default_value = "")]
        search: String,
        /// Only boxes going to this country, or "all"
        #[arg(short, long, default_value = "all")]
        country: CountryFilter,
        /// Sort by none, name, weight or cost
        #[arg(long, default_value = "none")]
        sort: SortField,
        /// Sort in descending order
        #[arg(long)]
        desc: bool,
    },
    /// Remove a box by id
    #[command(alias = "d")]
    Delete { id: String },
    /// Show the price per kilogram for every destination
    #[command(alias = "r")]
    Rates,
    /// Price a box without recording it
    #[command(alias = "q")]
    Quote {
        #[arg(short, long, allow_hyphen_values = true)]
        weight: f64,
        #[arg(short = 'd', long)]
        country: Country,
    },
    /// Open the interactive add-box and box-list screens
    #[command(alias = "i")]
    Ui,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            data_dir: self.data_dir.clone(),
            ephemeral: self.ephemeral,
            no_banner: self.no_banner,
            quiet: self.quiet,
            debounce: Duration::from_millis(self.debounce_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_negative_weight() {
        let cli = CommandLine::try_parse_from([
            "shipbox", "add", "-r", "Ada", "-w", "-3", "-d", "china",
        ])
        .unwrap();
        match cli.command {
            Commands::Add { receiver, weight, color, country } => {
                assert_eq!(receiver, "Ada");
                assert_eq!(weight, "-3");
                assert_eq!(color, None);
                assert_eq!(country, Country::China);
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn parses_list_options() {
        let cli = CommandLine::try_parse_from([
            "shipbox", "l", "--country", "brazil", "--sort", "cost", "--desc", "-qq",
        ])
        .unwrap();
        assert_eq!(cli.quiet, 2);
        match cli.command {
            Commands::List { search, country, sort, desc } => {
                assert_eq!(search, "");
                assert_eq!(country, CountryFilter::Only(Country::Brazil));
                assert_eq!(sort, SortField::Cost);
                assert!(desc);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn rejects_unknown_country() {
        assert!(CommandLine::try_parse_from(["shipbox", "quote", "-w", "1", "-d", "Mars"]).is_err());
    }

    #[test]
    fn builds_config_from_flags() {
        let cli = CommandLine::try_parse_from([
            "shipbox", "--ephemeral", "--debounce-ms", "450", "--data-dir", "/tmp/boxes", "rates",
        ])
        .unwrap();
        let cfg = cli.config();
        assert!(cfg.ephemeral);
        assert_eq!(cfg.debounce, Duration::from_millis(450));
        assert_eq!(cfg.data_dir, PathBuf::from("/tmp/boxes"));
    }

    #[test]
    fn config_defaults_without_flags() {
        let cfg = CommandLine::try_parse_from(["shipbox", "rates"]).unwrap().config();
        assert!(!cfg.ephemeral);
        assert_eq!(cfg.debounce, DEFAULT_DEBOUNCE);
        assert_eq!(cfg.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }
}
