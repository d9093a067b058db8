mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use mukpick_geo::{FixedPositionProvider, PermissionState, UnavailablePositionProvider};

#[derive(Debug, Parser)]
#[command(name = "mukpick")]
#[command(about = "Recommends a nearby restaurant via Naver local search")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Pick one restaurant near the given (or fallback) location.
    Recommend {
        /// Device latitude; without coordinates the fallback location is used.
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Device longitude.
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Pin the food category instead of drawing one at random.
        #[arg(long)]
        category: Option<String>,
        /// Also look up a representative photo for the pick.
        #[arg(long)]
        with_photo: bool,
        /// Simulated location-permission decision for this run.
        #[arg(long, value_enum, default_value_t = PermissionArg::Granted)]
        permission: PermissionArg,
    },
    /// Resolve and print the current location.
    Locate {
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },
    /// List venues near the resolved location for an explicit category.
    Search {
        #[arg(long)]
        category: String,
        #[arg(long, default_value = "음식점")]
        keyword: String,
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },
    /// Daily attendance check-in.
    Attendance,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PermissionArg {
    Granted,
    Denied,
    Blocked,
}

impl From<PermissionArg> for PermissionState {
    fn from(arg: PermissionArg) -> Self {
        match arg {
            PermissionArg::Granted => PermissionState::Granted,
            PermissionArg::Denied => PermissionState::Denied,
            PermissionArg::Blocked => PermissionState::Blocked,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = mukpick_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Recommend {
            lat,
            lon,
            category,
            with_photo,
            permission,
        } => match (lat, lon) {
            (Some(lat), Some(lon)) => {
                commands::run_recommend(
                    &config,
                    FixedPositionProvider::new(lat, lon),
                    permission.into(),
                    category.as_deref(),
                    with_photo,
                )
                .await
            }
            _ => {
                commands::run_recommend(
                    &config,
                    UnavailablePositionProvider,
                    permission.into(),
                    category.as_deref(),
                    with_photo,
                )
                .await
            }
        },
        Commands::Locate { lat, lon } => match (lat, lon) {
            (Some(lat), Some(lon)) => {
                commands::run_locate(&config, FixedPositionProvider::new(lat, lon)).await
            }
            _ => commands::run_locate(&config, UnavailablePositionProvider).await,
        },
        Commands::Search {
            category,
            keyword,
            lat,
            lon,
        } => match (lat, lon) {
            (Some(lat), Some(lon)) => {
                commands::run_search(
                    &config,
                    FixedPositionProvider::new(lat, lon),
                    &category,
                    &keyword,
                )
                .await
            }
            _ => {
                commands::run_search(&config, UnavailablePositionProvider, &category, &keyword)
                    .await
            }
        },
        Commands::Attendance => commands::run_attendance(&config),
    }
}
