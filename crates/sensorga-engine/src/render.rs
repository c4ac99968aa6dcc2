use std::fmt;

use crate::{GaConfig, geometry::Point};

/// One cell of a rendered coverage map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapCell {
    #[default]
    Uncovered,
    Covered,
    Sensor,
}

impl MapCell {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            MapCell::Uncovered => '.',
            MapCell::Covered => '#',
            MapCell::Sensor => 'S',
        }
    }
}

/// Human-readable view of a placement: sensor cells, covered cells and
/// uncovered cells.
///
/// Intended for reports after a run; the optimizer never builds one.
/// `Display` prints the top row (`y = height - 1`) first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageMap {
    width: usize,
    rows: Vec<Vec<MapCell>>,
}

impl CoverageMap {
    #[must_use]
    pub fn new(points: &[Point], radius: usize, width: usize, height: usize) -> Self {
        let grid = crate::geometry::coverage(points, radius, width, height);
        let mut rows: Vec<Vec<MapCell>> = grid
            .rows()
            .take(height)
            .map(|row| {
                row.iter()
                    .map(|&covered| {
                        if covered {
                            MapCell::Covered
                        } else {
                            MapCell::Uncovered
                        }
                    })
                    .collect()
            })
            .collect();
        for point in points.iter().filter(|p| p.is_within(width, height)) {
            rows[point.y][point.x] = MapCell::Sensor;
        }
        Self { width, rows }
    }

    #[must_use]
    pub fn from_config(points: &[Point], config: &GaConfig) -> Self {
        Self::new(points, config.radius, config.width, config.height)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<MapCell> {
        self.rows.get(y)?.get(x).copied()
    }

    /// Rows in display order, top row first.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[MapCell]> {
        self.rows.iter().rev().map(Vec::as_slice)
    }
}

impl fmt::Display for CoverageMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_top_down() {
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
