use std::io::{self, Write};

use crate::dynamics::state::State;

/// Write trajectory data to CSV format.
///
/// Columns: time, x, y, vx, vy
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &[State]) -> io::Result<()> {
    writeln!(writer, "time,x,y,vx,vy")?;

    for s in trajectory {
        writeln!(
            writer,
            "{:.3},{:.3},{:.3},{:.4},{:.4}",
            s.time, s.pos.x, s.pos.y, s.vel.x, s.vel.y,
        )?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, trajectory: &[State]) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_trajectory(&mut file, trajectory)?;
    file.flush()
}
