use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flight_planner::cache::{CacheConfig, CachedWeatherClient};
use flight_planner::catalog::{AdmissionError, Catalog};
use flight_planner::gate::{SafetyGate, StaticGate};
use flight_planner::network::{locations_of, sample_network};
use flight_planner::planner::{Criterion, Planner, RouteQuery, SearchConfig, SearchError};
use flight_planner::report::{BestRouteReport, DirectReport, RankedRoutesReport, RefusedReport};
use flight_planner::weather::{WeatherClient, WeatherConfig, WeatherError, survey};

/// Locations looked up concurrently during the weather survey.
const SURVEY_BATCH_SIZE: usize = 5;

/// Plan flights over the domestic schedule, grounding flights at cities
/// with unsafe weather.
#[derive(Parser, Debug)]
#[command(name = "flight-planner")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// OpenWeatherMap API key
    #[arg(long, global = true, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Skip the weather survey and treat every city as safe
    #[arg(long, global = true)]
    assume_safe: bool,

    /// Show at most this many routes in ranked listings
    #[arg(long, global = true)]
    max_routes: Option<usize>,

    /// Ignore routes with more than this many legs in ranked listings
    #[arg(long, global = true)]
    max_legs: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cheapest route
    Cheapest(Endpoints),
    /// Fastest route
    Fastest(Endpoints),
    /// Every route, cheapest first
    AllByCost(Endpoints),
    /// Every route, fastest first
    AllByTime(Endpoints),
    /// Direct flights only
    Direct(Endpoints),
}

impl Command {
    fn endpoints(&self) -> &Endpoints {
        match self {
            Command::Cheapest(e)
            | Command::Fastest(e)
            | Command::AllByCost(e)
            | Command::AllByTime(e)
            | Command::Direct(e) => e,
        }
    }
}

#[derive(Args, Debug)]
struct Endpoints {
    /// City to depart from
    from: String,
    /// City to arrive at
    to: String,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("no weather API key: set OPENWEATHER_API_KEY or pass --assume-safe")]
    MissingApiKey,

    #[error(transparent)]
    Weather(#[from] WeatherError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let endpoints = cli.command.endpoints();
    let query = RouteQuery::parse(&endpoints.from, &endpoints.to)?;

    let requests = sample_network();

    let snapshot = if cli.assume_safe {
        None
    } else {
        let api_key = cli.api_key.clone().ok_or(CliError::MissingApiKey)?;
        let client = WeatherClient::new(WeatherConfig::new(api_key))?;
        let client = CachedWeatherClient::new(client, &CacheConfig::default());
        Some(survey(&client, &locations_of(&requests), SURVEY_BATCH_SIZE).await)
    };

    let all_safe = StaticGate::all_safe();
    let gate: &dyn SafetyGate = match &snapshot {
        Some(snapshot) => snapshot,
        None => &all_safe,
    };

    let mut catalog = Catalog::new();
    let mut admitted = 0;
    for request in &requests {
        match catalog.admit(request, &gate) {
            Ok(admission) if admission.is_admitted() => admitted += 1,
            Ok(_) => {}
            Err(AdmissionError::Restricted(location)) => {
                debug!(
                    flight = %request.flight_no,
                    location = %location,
                    "Skipping flight at restricted location"
                );
            }
            Err(e) => warn!(flight = %request.flight_no, error = %e, "Invalid flight in schedule"),
        }
    }
    info!(
        admitted,
        scheduled = requests.len(),
        restricted = catalog.restricted().len(),
        "Catalog loaded"
    );

    let mut config = SearchConfig::default();
    if let Some(n) = cli.max_routes {
        config = config.with_max_routes(n);
    }
    if let Some(n) = cli.max_legs {
        config = config.with_max_legs(n);
    }
    let planner = Planner::new(&catalog, &config);

    let outcome = match &cli.command {
        Command::Cheapest(_) => best(&planner, &query, Criterion::Cost),
        Command::Fastest(_) => best(&planner, &query, Criterion::Time),
        Command::AllByCost(_) => ranked(&planner, &query, Criterion::Cost),
        Command::AllByTime(_) => ranked(&planner, &query, Criterion::Time),
        Command::Direct(_) => planner.direct(&query).map(|connections| {
            DirectReport {
                query: &query,
                connections: &connections,
            }
            .to_string()
        }),
    };

    match outcome {
        Ok(text) => {
            print!("{text}");
            Ok(())
        }
        Err(SearchError::Restricted(location)) => {
            let summary = snapshot.as_ref().and_then(|s| s.summary(&location));
            print!(
                "{}",
                RefusedReport {
                    location: &location,
                    summary,
                }
            );
            Err(SearchError::Restricted(location).into())
        }
        Err(e) => Err(e.into()),
    }
}

fn best(
    planner: &Planner<'_>,
    query: &RouteQuery,
    criterion: Criterion,
) -> Result<String, SearchError> {
    let route = planner.best(query, criterion)?;
    Ok(BestRouteReport {
        query,
        criterion,
        route: route.as_ref(),
    }
    .to_string())
}

fn ranked(
    planner: &Planner<'_>,
    query: &RouteQuery,
    criterion: Criterion,
) -> Result<String, SearchError> {
    let routes = planner.all_routes(query, criterion)?;
    Ok(RankedRoutesReport {
        query,
        criterion,
        routes: &routes,
    }
    .to_string())
}
