//! Subcommands and their dispatch onto the airspace tools.

mod bbox;
mod output;

use clap::Subcommand;
use opensky_live::provider::AsyncHttpClient;
use opensky_live::tools::{AirspaceTools, Envelope};

use crate::error::CliError;

pub use bbox::BboxArgs;
pub use output::emit;

/// Tool subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the named region presets
    Regions,

    /// Raw state vectors inside a bounding box
    States {
        #[command(flatten)]
        bbox: BboxArgs,

        /// Request the extended state format (adds aircraft category)
        #[arg(long)]
        extended: bool,
    },

    /// Normalized aircraft records inside a bounding box
    Normalized {
        #[command(flatten)]
        bbox: BboxArgs,
    },

    /// Fastest, highest and most common callsign prefixes in a bounding box
    Summary {
        #[command(flatten)]
        bbox: BboxArgs,

        /// Entries per leaderboard (defaults to [summary] top_n)
        #[arg(long)]
        top_n: Option<usize>,
    },

    /// Same as `summary`, for a named region preset
    RegionSummary {
        /// Region name (see `regions`)
        region: String,

        /// Entries per leaderboard (defaults to [summary] top_n)
        #[arg(long)]
        top_n: Option<usize>,
    },

    /// Check whether the provider currently covers a bounding box
    Coverage {
        #[command(flatten)]
        bbox: BboxArgs,
    },
}

/// Run a subcommand and print its envelope.
///
/// Returns the envelope's `ok` flag.
pub async fn run<C: AsyncHttpClient>(
    tools: &AirspaceTools<C>,
    command: Commands,
) -> Result<bool, CliError> {
    match command {
        Commands::Regions => emit(&Envelope::success(tools.regions_catalog())),
        Commands::States { bbox, extended } => match bbox.to_bbox() {
            Ok(bbox) => emit(&Envelope::from(tools.live_states(bbox, extended).await)),
            Err(e) => emit(&Envelope::<()>::failure(e)),
        },
        Commands::Normalized { bbox } => match bbox.to_bbox() {
            Ok(bbox) => emit(&Envelope::from(tools.normalized_states(bbox).await)),
            Err(e) => emit(&Envelope::<()>::failure(e)),
        },
        Commands::Summary { bbox, top_n } => match bbox.to_bbox() {
            Ok(bbox) => emit(&Envelope::from(tools.airspace_summary(bbox, top_n).await)),
            Err(e) => emit(&Envelope::<()>::failure(e)),
        },
        Commands::RegionSummary { region, top_n } => emit(&Envelope::from(
            tools.airspace_summary_by_region(&region, top_n).await,
        )),
        Commands::Coverage { bbox } => match bbox.to_bbox() {
            Ok(bbox) => emit(&Envelope::from(tools.coverage(bbox).await)),
            Err(e) => emit(&Envelope::<()>::failure(e)),
        },
    }
}
