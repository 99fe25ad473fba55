use clap::Parser;
use std::{fs::File, io::Write, path::PathBuf, process::ExitCode};
use traffic_monitor::{
    sdk::config::ProviderConfig,
    sdk::dashboard::{handle_request, RouteQuery},
    sdk::render::{map_geojson, render_recommendation, render_table, write_table_csv},
    sdk::routing::{
        error::DashboardError,
        provider::{GoogleDirectionsProvider, SyntheticProvider},
        route::TravelMode,
        service::RoutingProvider,
    },
    sdk::util::log::init_logging,
};

/// Real-time traffic congestion for alternative routes between two places
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Start location (e.g., "MG Road, Bangalore")
    #[arg(short, long)]
    origin: Option<String>,

    /// Destination (e.g., "Majestic, Bangalore")
    #[arg(short, long)]
    destination: Option<String>,

    /// Transport mode
    #[arg(short, long, value_enum, default_value_t = TravelMode::Driving)]
    mode: TravelMode,

    /// Where to write the map view (GeoJSON)
    #[arg(long, default_value = "routes.geojson")]
    map_out: PathBuf,

    /// [Optional] Also write the route table as CSV
    #[arg(long)]
    csv_out: Option<PathBuf>,

    /// [Optional] Write the full report as JSON
    #[arg(long)]
    json_out: Option<PathBuf>,

    /// [Optional] Seed for demo data (ignored when an API key is configured)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn build_provider(
    config: ProviderConfig,
    seed: Option<u64>,
) -> Result<Box<dyn RoutingProvider>, DashboardError> {
    let provider: Box<dyn RoutingProvider> = match config {
        ProviderConfig::Live { api_key } => {
            log::info!("Using live Google Directions provider");
            Box::new(GoogleDirectionsProvider::new(api_key)?)
        }
        ProviderConfig::Synthetic => {
            log::warn!("No API key configured; generating demo routes");
            match seed {
                Some(seed) => Box::new(SyntheticProvider::seeded(seed)),
                None => Box::new(SyntheticProvider::new()),
            }
        }
    };
    Ok(provider)
}

fn run(cli: &Cli) -> Result<(), DashboardError> {
    let query = RouteQuery::new(
        cli.origin.as_deref().unwrap_or_default(),
        cli.destination.as_deref().unwrap_or_default(),
        cli.mode,
    )?;

    let provider = build_provider(ProviderConfig::from_env(), cli.seed)?;

    // Everything below only runs once the whole pipeline has succeeded.
    let report = handle_request(provider.as_ref(), &query)?;

    // Render every output before touching the filesystem.
    let table = render_table(&report.routes);
    let recommendation = render_recommendation(&report)?;
    let mut outputs = vec![(
        cli.map_out.as_path(),
        serde_json::to_string_pretty(&map_geojson(&report))?.into_bytes(),
    )];
    if let Some(path) = &cli.csv_out {
        let mut csv_bytes = Vec::new();
        write_table_csv(&report.routes, &mut csv_bytes)?;
        outputs.push((path.as_path(), csv_bytes));
    }
    if let Some(path) = &cli.json_out {
        outputs.push((path.as_path(), serde_json::to_string_pretty(&report)?.into_bytes()));
    }
    for (path, bytes) in &outputs {
        File::create(path)?.write_all(bytes)?;
    }

    if report.synthetic {
        println!("ℹ️  Demo data generated.");
    }
    println!(
        "✅ Found {} route(s) from {} to {} (traffic as of {})",
        report.routes.len(),
        query.origin,
        query.destination,
        report.requested_at.format("%H:%M")
    );
    println!();
    println!("📊 Route Information");
    println!("{}", table);
    println!();
    println!("🗺️  Map view written to {}", cli.map_out.display());
    if let Some(path) = &cli.csv_out {
        println!("📄 Route table written to {}", path.display());
    }
    if let Some(path) = &cli.json_out {
        println!("📄 Report written to {}", path.display());
    }
    println!();
    println!("💡 Route Recommendation");
    println!("{}", recommendation);

    Ok(())
}
