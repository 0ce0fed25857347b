use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use projectile_sim::dynamics::state::{area_from_diameter, SimConfig, SimulationParameters, State};
use projectile_sim::io::csv;
use projectile_sim::io::json::{self, FlightSummary};
use projectile_sim::physics::{aerodynamics, gravity};
use projectile_sim::sim::{self, event::EventKind, Trajectory};

/// Simulate a projectile launch and print a flight report.
///
/// Parameters start from `--config` (or the built-in defaults) and any flag
/// given on the command line overrides the loaded value.
#[derive(Parser, Debug)]
#[command(name = "projectile-sim", version, about)]
struct Args {
    /// JSON file with launch parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial speed, m/s [default: 60]
    #[arg(long)]
    speed: Option<f64>,

    /// Launch angle above horizontal, degrees [default: 20]
    #[arg(long, allow_negative_numbers = true)]
    angle: Option<f64>,

    /// Projectile mass, kg [default: 1]
    #[arg(long)]
    mass: Option<f64>,

    /// Integration time step, s [default: 0.01]
    #[arg(long, allow_negative_numbers = true)]
    dt: Option<f64>,

    /// Drag coefficient [default: 0.47]
    #[arg(long)]
    cd: Option<f64>,

    /// Disable air resistance
    #[arg(long)]
    no_drag: bool,

    /// Projectile diameter, m (sets the reference area) [default: 0.1]
    #[arg(long, conflicts_with = "area")]
    diameter: Option<f64>,

    /// Reference area, m^2
    #[arg(long)]
    area: Option<f64>,

    /// Air density, kg/m^3 [default: 1.225]
    #[arg(long)]
    density: Option<f64>,

    /// Gravitational acceleration, m/s^2 [default: 9.81]
    #[arg(long)]
    gravity: Option<f64>,

    /// Air temperature, K [default: 293.15]
    #[arg(long)]
    temperature: Option<f64>,

    /// Stop a run that has not landed after this many simulated seconds
    #[arg(long, default_value_t = 600.0)]
    max_time: f64,

    /// Number of rows in the printed trajectory table
    #[arg(long, default_value_t = 25)]
    rows: usize,

    /// Also run the same launch in vacuum and compare
    #[arg(long)]
    compare: bool,

    /// Write the full trajectory as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the flight summary as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Args {
    fn parameters(&self) -> Result<SimulationParameters> {
        let mut p = match &self.config {
            Some(path) => load_parameters(path)?,
            None => SimulationParameters::default(),
        };

        if let Some(v) = self.speed { p.initial_speed = v; }
        if let Some(v) = self.angle { p.launch_angle = v; }
        if let Some(v) = self.mass { p.mass = v; }
        if let Some(v) = self.dt { p.time_step = v; }
        if let Some(v) = self.cd { p.drag_coefficient = v; }
        if let Some(v) = self.diameter { p.cross_sectional_area = area_from_diameter(v); }
        if let Some(v) = self.area { p.cross_sectional_area = v; }
        if let Some(v) = self.density { p.air_density = v; }
        if let Some(v) = self.gravity { p.gravity = v; }
        if let Some(v) = self.temperature { p.temperature = v; }
        if self.no_drag {
            p.include_drag = false;
        }
        Ok(p)
    }
}

fn load_parameters(path: &Path) -> Result<SimulationParameters> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let params = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(params)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let params = args.parameters()?;
    let config = SimConfig { max_time: args.max_time };

    let trajectory = sim::simulate(&params, &config).context("simulation failed")?;
    let summary = FlightSummary::from_trajectory(&trajectory, &params);

    print_report(&params, &trajectory, &summary, args.rows);

    if args.compare {
        let mut vacuum = params.clone();
        vacuum.include_drag = false;
        let reference = sim::simulate(&vacuum, &config).context("vacuum simulation failed")?;
        print_comparison(&params, &trajectory, &reference);
    }

    if let Some(path) = &args.csv {
        let path = path.to_string_lossy();
        csv::write_trajectory_file(&path, &trajectory.samples)
            .with_context(|| format!("writing {}", path))?;
        println!("  Exported trajectory: {}", path);
    }
    if let Some(path) = &args.json {
        let path = path.to_string_lossy();
        json::write_summary_file(&path, &params, &summary)
            .with_context(|| format!("writing {}", path))?;
        println!("  Exported summary:    {}", path);
    }

    Ok(())
}

fn print_report(params: &SimulationParameters, traj: &Trajectory, summary: &FlightSummary, rows: usize) {
    println!();
    println!("====================================================================");
    println!("  PROJECTILE SIMULATION");
    println!("====================================================================");
    println!();
    println!("  Launch Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Speed:         {:>8.2} m/s   Angle:        {:>8.2} deg",
        params.initial_speed, params.launch_angle
    );
    println!(
        "  Mass:          {:>8.3} kg    Time step:    {:>8.4} s",
        params.mass, params.time_step
    );
    if params.include_drag {
        println!(
            "  Cd:            {:>8.3}       Area:         {:>8.5} m^2",
            params.drag_coefficient, params.cross_sectional_area
        );
        println!(
            "  Air density:   {:>8.3} kg/m^3 Terminal v:  {:>8.1} m/s",
            params.air_density,
            aerodynamics::terminal_velocity(
                params.mass,
                params.gravity,
                params.air_density,
                params.drag_coefficient,
                params.cross_sectional_area,
            )
        );
    } else {
        println!("  Air resistance: off");
    }
    println!();

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    for event in &traj.events {
        let label = match &event.kind {
            EventKind::Launch => "LAUNCH".to_string(),
            EventKind::Apex => "APEX".to_string(),
            EventKind::Impact => "IMPACT".to_string(),
            EventKind::Custom(name) => name.clone(),
        };
        println!(
            "  {:<8}  t={:>7.3}s   x={:>9.3}m   y={:>8.3}m   v={:>7.2}m/s",
            label,
            event.time,
            event.state.pos.x,
            event.state.pos.y,
            event.state.speed()
        );
    }
    if !traj.landed {
        println!("  (no impact before {:.1} s)", traj.samples.last().map_or(0.0, |s| s.time));
    }
    println!();

    println!("  Performance Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Range:         {:>9.3} m", summary.range_m);
    println!("  Max height:    {:>9.3} m   at t={:.3} s", summary.apex_m, summary.apex_time_s);
    println!("  Flight time:   {:>9.3} s", summary.flight_time_s);
    println!(
        "  Impact:        {:>9.2} m/s at {:.2} deg below horizontal",
        summary.impact_speed_ms, summary.impact_angle_deg
    );
    if params.include_drag {
        println!("  Launch Re:     {:>9.3e}", summary.launch_reynolds);
    }
    println!();

    print_table(&traj.samples, rows);

    println!();
    println!("  Simulation: {} samples, dt={} s", traj.samples.len(), params.time_step);
    println!("====================================================================");
    println!();
}

fn print_table(samples: &[State], rows: usize) {
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>8}  {:>10}  {:>9}  {:>9}  {:>9}",
        "t (s)", "x (m)", "y (m)", "vx (m/s)", "vy (m/s)"
    );
    println!("  {}", "─".repeat(54));

    let interval = (samples.len() / rows.max(1)).max(1);
    for (i, s) in samples.iter().enumerate() {
        if i % interval != 0 && i != samples.len() - 1 {
            continue;
        }
        println!(
            "  {:>8.3}  {:>10.3}  {:>9.3}  {:>9.3}  {:>9.3}",
            s.time, s.pos.x, s.pos.y, s.vel.x, s.vel.y
        );
    }
}

fn print_comparison(params: &SimulationParameters, with_drag: &Trajectory, vacuum: &Trajectory) {
    let theta = params.launch_angle_rad();
    let exact = gravity::vacuum_range(params.initial_speed, theta, params.gravity);
    let apex = gravity::vacuum_apex(params.initial_speed, theta, params.gravity);
    let tof = gravity::vacuum_flight_time(params.initial_speed, theta, params.gravity);

    println!("  Drag Comparison");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  {:<22} {:>10} {:>10} {:>10}", "", "range (m)", "apex (m)", "time (s)");
    println!(
        "  {:<22} {:>10.3} {:>10.3} {:>10.3}",
        "closed form (vacuum)", exact, apex, tof
    );
    for (label, traj) in [("euler (vacuum)", vacuum), ("euler (as configured)", with_drag)] {
        println!(
            "  {:<22} {:>10.3} {:>10.3} {:>10.3}",
            label,
            traj.range(),
            traj.apex().map_or(0.0, |s| s.pos.y),
            traj.samples.last().map_or(0.0, |s| s.time),
        );
    }
    if exact > 0.0 {
        println!(
            "  Euler vacuum error: {:.3}%   Drag loss: {:.1}%",
            (vacuum.range() - exact).abs() / exact * 100.0,
            (1.0 - with_drag.range() / vacuum.range()) * 100.0
        );
    }
    println!();
}
