use std::path::{Path, PathBuf};
use std::process::ExitCode;

use dotenv::dotenv;
use log::{error, info, warn};
use strum::IntoEnumIterator;
use wkt::ToWkt;

use rendezvous::{MatchConfig, MatchError, Precision, Trajectory};

const DEFAULT_FIRST: &str = "gps1.json";
const DEFAULT_SECOND: &str = "gps2.json";

fn load(path: &Path) -> Result<Trajectory, rendezvous::Error> {
    let trajectory = Trajectory::from_path(path)?;

    if !trajectory.is_traversable() {
        warn!(
            "{} has {} waypoint(s), no segments can be formed",
            path.display(),
            trajectory.len()
        );
    }

    log::debug!("{}: {}", path.display(), trajectory.linestring().wkt_string());
    Ok(trajectory)
}

fn run() -> Result<(), rendezvous::Error> {
    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let first_path = args.next().unwrap_or_else(|| PathBuf::from(DEFAULT_FIRST));
    let second_path = args.next().unwrap_or_else(|| PathBuf::from(DEFAULT_SECOND));

    let config = MatchConfig::from_env()?;
    info!("Matching with {:?}", config);

    let first = load(&first_path)?;
    let second = load(&second_path)?;

    // Exact coordinate matches rarely share a timestamp, they only
    // hint at places both entities visited.
    for precision in Precision::iter() {
        let pairs = config.exact(precision).matches(&first, &second);
        info!("{} precision: {} matching waypoint(s)", precision, pairs.len());

        for pair in &pairs {
            info!("  {:?} <> {:?}", pair.first, pair.second);
        }
    }

    let ranked = config.proximity().rank(&first, &second);
    info!(
        "{} waypoint pair(s) within {}m",
        ranked.len(),
        config.max_distance
    );

    if let Some(closest) = ranked.first() {
        info!(
            "Closest: {:?} <> {:?} ({:.2}m, {} apart)",
            closest.first,
            closest.second,
            closest.distance.unwrap_or_default(),
            closest.time_apart()
        );
    }

    let crossing = config.intersection().find_crossing(&first, &second)?;
    info!(
        "Crossed between {} and {}",
        crossing.first.wkt_string(),
        crossing.second.wkt_string()
    );

    println!("{}", crossing.meeting_point());
    Ok(())
}

fn main() -> ExitCode {
    // Load `.env` file, if any
    dotenv().ok();
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(rendezvous::Error::Match(MatchError::NoCrossingFound)) => {
            error!("The trajectories never crossed paths at the same time");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
