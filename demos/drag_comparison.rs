use projectile_sim::dynamics::state::{ParametersBuilder, SampleResult, SimulationParameters};
use projectile_sim::sim::TrajectoryIntegrator;

/// Step two launches side by side, one tick at a time, the way an
/// animation loop would, and report where each lands.
fn main() {
    let with_drag = ParametersBuilder::new()
        .initial_speed(60.0)
        .launch_angle(35.0)
        .time_step(0.01)
        .include_drag(true)
        .build();
    let without_drag = SimulationParameters { include_drag: false, ..with_drag.clone() };

    let mut vacuum = TrajectoryIntegrator::new(without_drag).expect("Invalid vacuum launch");
    let mut air = TrajectoryIntegrator::new(with_drag).expect("Invalid drag launch");

    let mut ticks = 0;
    let mut landed = [None, None];
    while landed.iter().any(Option::is_none) {
        ticks += 1;
        for (slot, integrator) in landed.iter_mut().zip([&mut vacuum, &mut air]) {
            match integrator.next_sample() {
                Ok(SampleResult::Impact(s)) => *slot = Some(s),
                Ok(_) => {}
                Err(e) => panic!("run abandoned: {}", e),
            }
        }
        if ticks % 100 == 0 {
            println!(
                "tick {:>4}: vacuum ({:>7.2}, {:>6.2})   drag ({:>7.2}, {:>6.2})",
                ticks,
                vacuum.state().pos.x,
                vacuum.state().pos.y,
                air.state().pos.x,
                air.state().pos.y,
            );
        }
    }

    let [Some(v), Some(a)] = landed else { unreachable!() };
    println!();
    println!("Vacuum: lands at {:>7.2} m after {:.2} s", v.pos.x, v.time);
    println!("Drag:   lands at {:>7.2} m after {:.2} s", a.pos.x, a.time);
    println!("Drag costs {:.1}% of the range", (1.0 - a.pos.x / v.pos.x) * 100.0);
}
