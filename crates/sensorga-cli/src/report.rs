use std::io::{self, Write};

use sensorga_engine::CoverageMap;

use crate::schema::RunRecord;

/// Writes the plain-text summary of a run: best fitness, sensor positions,
/// coverage map and the best-so-far fitness of every generation.
pub fn write_report<W>(out: &mut W, record: &RunRecord) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let RunRecord {
        config,
        best,
        fitness_history,
        seed,
        ..
    } = record;

    writeln!(out, "Best fitness: {}", best.fitness)?;
    writeln!(out, "Seed: {seed}")?;
    writeln!(out, "Best sensor positions (x, y):")?;
    for point in &best.sensors {
        writeln!(out, "{point}")?;
    }

    let map = CoverageMap::from_config(&best.sensors, config);
    writeln!(out)?;
    writeln!(out, "Coverage map (S = sensor, # = covered, . = uncovered):")?;
    write!(out, "{map}")?;

    writeln!(out)?;
    writeln!(out, "Best fitness over generations:")?;
    for (generation, fitness) in fitness_history.iter().enumerate() {
        writeln!(out, "{generation} {fitness}")?;
    }
    Ok(())
}
