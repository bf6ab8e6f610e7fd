use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_FILE;
use crate::export::ExportFormat;
use crate::models::Nutrient;

/// fastfood: look up fast-food nutrition and total up a meal.
#[derive(Parser, Debug)]
#[command(name = "fastfood")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the menu CSV (overrides the config file).
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Config file with `menu_path` and `default_restaurant`.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Brand for sources without a restaurant column.
    #[arg(long)]
    pub default_restaurant: Option<String>,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick a restaurant and build a meal interactively.
    Build,

    /// List restaurants.
    Restaurants {
        /// Sort case-insensitively instead of source order.
        #[arg(long)]
        sorted: bool,
    },

    /// List a restaurant's categories.
    Categories {
        restaurant: String,

        /// Only categories containing this text.
        #[arg(long)]
        filter: Option<String>,
    },

    /// List a restaurant's items, optionally for one category.
    Items {
        restaurant: String,

        category: Option<String>,

        /// Order by a nutrient (items without a value go last).
        #[arg(long, value_enum)]
        sort_by: Option<Nutrient>,

        /// Sort high to low.
        #[arg(long)]
        desc: bool,
    },

    /// Search items by id or name.
    Search {
        query: String,

        /// Limit the search to one restaurant.
        #[arg(short, long)]
        restaurant: Option<String>,
    },

    /// Total up a meal from names, ids or row numbers.
    Totals {
        /// Exact item name; every row with this name counts.
        #[arg(long = "name")]
        names: Vec<String>,

        /// Item id from the source.
        #[arg(long = "id")]
        ids: Vec<u64>,

        /// Row number as shown by `search`/`items` (0-based catalog row).
        #[arg(long = "row")]
        rows: Vec<usize>,

        /// Include every extended nutrient.
        #[arg(long)]
        detailed: bool,
    },

    /// Write the normalized catalog to a file.
    Export {
        out: PathBuf,

        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Build
    }
}
