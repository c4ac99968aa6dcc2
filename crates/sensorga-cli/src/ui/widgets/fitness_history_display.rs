use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::Marker,
    widgets::{Axis, Block as BlockWidget, Chart, Dataset, GraphType, Widget},
};

use super::style;

/// Line chart of the best-so-far fitness per generation.
#[derive(Debug)]
pub struct FitnessHistoryDisplay<'a> {
    history: &'a [f64],
    block: Option<BlockWidget<'a>>,
}

impl<'a> FitnessHistoryDisplay<'a> {
    pub fn new(history: &'a [f64]) -> Self {
        Self {
            history,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_precision_loss)]
    fn points(&self) -> Vec<(f64, f64)> {
        self.history
            .iter()
            .enumerate()
            .map(|(generation, fitness)| (generation as f64, *fitness))
            .collect()
    }

    /// Y bounds padded so a flat history is still drawn inside the chart.
    fn y_bounds(&self) -> [f64; 2] {
        let min = self.history.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self
            .history
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        if !min.is_finite() || !max.is_finite() {
            return [0.0, 1.0];
        }
        let pad = ((max - min) * 0.05).max(1.0);
        [min - pad, max + pad]
    }
}

impl Widget for FitnessHistoryDisplay<'_> {
    #[expect(clippy::cast_precision_loss)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let points = self.points();
        let last_generation = self.history.len().saturating_sub(1);
        let [y_min, y_max] = self.y_bounds();

        let dataset = Dataset::default()
            .name("best so far")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(style::HISTORY)
            .data(&points);
        let mut chart = Chart::new(vec![dataset])
            .x_axis(
                Axis::default()
                    .title("generation")
                    .bounds([0.0, (last_generation as f64).max(1.0)])
                    .labels(["0".to_owned(), last_generation.to_string()]),
            )
            .y_axis(
                Axis::default()
                    .title("fitness")
                    .bounds([y_min, y_max])
                    .labels([format!("{y_min:.0}"), format!("{y_max:.0}")]),
            );
        if let Some(block) = self.block {
            chart = chart.block(block);
        }
        chart.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_bounds_pad_flat_history() {
        let history = [10.0, 10.0, 10.0];
        let display = FitnessHistoryDisplay::new(&history);
        assert_eq!(display.y_bounds(), [9.0, 11.0]);
    }

    #[test]
    fn test_y_bounds_empty_history() {
        let display = FitnessHistoryDisplay::new(&[]);
        assert_eq!(display.y_bounds(), [0.0, 1.0]);
    }

    #[test]
    fn test_points_are_indexed_by_generation() {
        let history = [-4.0, 2.5];
        let display = FitnessHistoryDisplay::new(&history);
        assert_eq!(display.points(), vec![(0.0, -4.0), (1.0, 2.5)]);
    }
}
