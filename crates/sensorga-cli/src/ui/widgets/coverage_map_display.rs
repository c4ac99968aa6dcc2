use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block as BlockWidget, BlockExt, Paragraph, Widget},
};
use sensorga_engine::{CoverageMap, MapCell, Point};

use super::style;

/// Coverage map with one terminal column per grid cell, top row first.
#[derive(Debug)]
pub struct CoverageMapDisplay<'a> {
    map: &'a CoverageMap,
    selected: Option<Point>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> CoverageMapDisplay<'a> {
    pub fn new(map: &'a CoverageMap) -> Self {
        Self {
            map,
            selected: None,
            block: None,
        }
    }

    /// Highlights the sensor at `point`.
    pub fn selected(self, point: Point) -> Self {
        Self {
            selected: Some(point),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        u16::try_from(self.map.width())
            .unwrap_or(u16::MAX)
            .saturating_add(super::block_horizontal_margin(self.block.as_ref()))
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.map.height())
            .unwrap_or(u16::MAX)
            .saturating_add(super::block_vertical_margin(self.block.as_ref()))
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let top = self.map.height().saturating_sub(1);
        self.map
            .rows_top_down()
            .enumerate()
            .map(|(i, row)| {
                let y = top - i;
                row.iter()
                    .enumerate()
                    .map(|(x, cell)| {
                        let style = match cell {
                            MapCell::Sensor if self.selected == Some(Point::new(x, y)) => {
                                style::SELECTED
                            }
                            MapCell::Sensor => style::SENSOR,
                            MapCell::Covered => style::COVERED,
                            MapCell::Uncovered => style::UNCOVERED,
                        };
                        Span::styled(cell.as_char().to_string(), style)
                    })
                    .collect::<Line>()
            })
            .collect()
    }
}

impl Widget for CoverageMapDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CoverageMapDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        Paragraph::new(Text::from(self.lines())).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_top_row_first() {
        let map = CoverageMap::new(&[Point::new(0, 0)], 1, 3, 2);
        let display = CoverageMapDisplay::new(&map);
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        Widget::render(&display, area, &mut buf);
        let rendered: Vec<String> = (0..2)
            .map(|y| (0..3).map(|x| buf[(x, y)].symbol()).collect())
            .collect();
        assert_eq!(rendered, ["#..", "S#."]);
    }

    #[test]
    fn test_size_includes_block() {
        let map = CoverageMap::new(&[Point::new(0, 0)], 1, 20, 10);
        let display = CoverageMapDisplay::new(&map).block(BlockWidget::bordered());
        assert_eq!(display.width(), 22);
        assert_eq!(display.height(), 12);
    }

    #[test]
    fn test_size_saturates_for_wide_maps() {
        let map = CoverageMap::new(&[], 0, 70_000, 1);
        let display = CoverageMapDisplay::new(&map).block(BlockWidget::bordered());
        assert_eq!(display.width(), u16::MAX);
        assert_eq!(display.height(), 3);

        let map = CoverageMap::new(&[], 0, 65_534, 1);
        let display = CoverageMapDisplay::new(&map).block(BlockWidget::bordered());
        assert_eq!(display.width(), u16::MAX);
    }

    #[test]
    fn test_selected_sensor_is_highlighted() {
        let map = CoverageMap::new(&[Point::new(1, 0), Point::new(2, 1)], 0, 3, 2);
        let display = CoverageMapDisplay::new(&map).selected(Point::new(2, 1));
        let lines = display.lines();
        assert_eq!(lines[0].spans[2].style, style::SELECTED);
        assert_eq!(lines[1].spans[1].style, style::SENSOR);
    }
}
