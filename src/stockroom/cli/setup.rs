use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stockroom::api::SortOrder;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "stockroom", bin_name = "stockroom", version = get_version())]
#[command(about = "Manage a category-bucketed product catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (default: $STOCKROOM_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    #[default]
    Newest,
    Oldest,
    PriceAsc,
    PriceDesc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Newest => SortOrder::Newest,
            SortArg::Oldest => SortOrder::Oldest,
            SortArg::PriceAsc => SortOrder::PriceLowHigh,
            SortArg::PriceDesc => SortOrder::PriceHighLow,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Page to show, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Results per page (default from config)
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub per_page: Option<String>,

    /// Only show products of this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort order
    #[arg(short, long, value_enum, default_value_t = SortArg::Newest)]
    pub sort: SortArg,

    /// Presentation
    #[arg(long, value_enum, default_value_t = ViewMode::List)]
    pub view: ViewMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product to a category
    #[command(alias = "a")]
    Add {
        /// Product name
        #[arg(short, long, default_value = "")]
        title: String,

        /// Price, e.g. 19.99
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        price: String,

        /// Stock quantity
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        stock: String,

        /// Image URL
        #[arg(short, long, default_value = "")]
        image: String,

        /// Description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Existing category to add to (default from config)
        #[arg(short, long)]
        category: Option<String>,

        /// New category name; takes precedence over --category
        #[arg(long, value_name = "NAME")]
        new_category: Option<String>,
    },

    /// List category names
    #[command(alias = "cats")]
    Categories,

    /// List products, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a single product
    #[command(alias = "v")]
    View {
        /// Product id
        id: String,
    },

    /// Delete a product (asks for confirmation)
    #[command(alias = "rm")]
    Delete {
        /// Product id
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (results-per-page, default-category)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the data directory
    Init,
}
