use std::path::PathBuf;

use clap::Parser;
use log::*;

use lunar_descent::io::{self, DescentReport, DescentSummary};
use lunar_descent::sim;
use lunar_descent::types::{InitialConditions, LanderBuilder, SimConfig, DEFAULT_MAX_STEPS};

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Structural (dry) mass, kg
    #[clap(long, default_value_t = 1500.0)]
    dry_mass: f64,
    /// Initial fuel load, kg
    #[clap(long, default_value_t = 800.0)]
    fuel: f64,
    /// Full-throttle engine thrust, N
    #[clap(long, default_value_t = 4500.0)]
    thrust: f64,
    /// Fuel consumption while firing, kg/s
    #[clap(long, default_value_t = 5.0)]
    burn_rate: f64,
    /// Initial altitude, m
    #[clap(long, default_value_t = 1500.0)]
    altitude: f64,
    /// Initial vertical velocity, m/s (negative = descending)
    #[clap(long, default_value_t = -10.0, allow_hyphen_values = true)]
    velocity: f64,
    /// Integration timestep, s
    #[clap(long, default_value_t = 0.1)]
    dt: f64,
    /// Surface gravity, m/s^2
    #[clap(long, default_value_t = 1.625)]
    gravity: f64,
    /// Abort if the craft has not landed after this many steps
    #[clap(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: u64,
    /// Also write every snapshot to this CSV file
    #[clap(long)]
    csv: Option<PathBuf>,
    /// Print a JSON report instead of status lines
    #[clap(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Cli::parse();
    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let lander = LanderBuilder::new()
        .dry_mass(args.dry_mass)
        .fuel_mass(args.fuel)
        .thrust(args.thrust)
        .burn_rate(args.burn_rate)
        .initial(InitialConditions {
            altitude: args.altitude,
            velocity: args.velocity,
            ..InitialConditions::default()
        })
        .build()?;
    let config = SimConfig {
        dt: args.dt,
        gravity: args.gravity,
        max_steps: args.max_steps,
    };

    let descent = sim::simulate(lander, &config)?;

    if let Some(path) = &args.csv {
        io::write_snapshots_file(path, &descent.snapshots)?;
        info!("Wrote {} snapshots to {:?}", descent.snapshots.len(), path);
    }

    if args.json {
        DescentReport::new(&descent, args.fuel).write(std::io::stdout().lock())?;
        println!();
        return Ok(());
    }

    for s in &descent.snapshots {
        println!("{}", s);
    }
    for ev in descent.no_fuel_events() {
        println!("{}", ev);
    }

    let summary = DescentSummary::from_run(&descent, args.fuel);
    println!();
    println!(
        "  Steps: {}   Flight time: {:.1} s   Fuel used: {:.1} kg   Touchdown: {:.2} m/s",
        summary.steps, summary.flight_time_s, summary.fuel_used_kg, summary.touchdown_velocity_ms
    );
    println!();
    println!("Landing result:");
    println!("{}", summary.landing);

    Ok(())
}
