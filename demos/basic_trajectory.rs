use projectile_sim::dynamics::state::{ParametersBuilder, SimConfig};
use projectile_sim::io::csv;
use projectile_sim::io::json::{self, FlightSummary};
use projectile_sim::sim;

fn main() {
    let params = ParametersBuilder::new()
        .initial_speed(60.0)
        .launch_angle(20.0)
        .mass(1.0)
        .time_step(0.01)
        .drag_coefficient(0.47)
        .diameter(0.1)
        .build();

    println!("Simulating {} m/s at {} deg ...", params.initial_speed, params.launch_angle);
    let trajectory = sim::simulate(&params, &SimConfig::default()).expect("Invalid launch");

    let summary = FlightSummary::from_trajectory(&trajectory, &params);
    println!("Range: {:.2} m", summary.range_m);
    println!("Max height: {:.2} m at t={:.2} s", summary.apex_m, summary.apex_time_s);
    println!("Flight time: {:.2} s", summary.flight_time_s);

    csv::write_trajectory_file("basic_trajectory.csv", &trajectory.samples)
        .expect("Failed to write CSV");
    json::write_summary_file("basic_summary.json", &params, &summary)
        .expect("Failed to write JSON");

    println!("Exported: basic_trajectory.csv, basic_summary.json");
}
