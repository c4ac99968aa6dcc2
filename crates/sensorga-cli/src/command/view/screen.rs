use std::path::PathBuf;

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block as BlockWidget, List, ListItem, ListState, Padding, Paragraph},
};
use sensorga_engine::{CoverageFitness, CoverageMap};

use crate::{
    schema::RunRecord,
    ui::widgets::{CoverageMapDisplay, FitnessHistoryDisplay, style},
};

#[derive(Debug)]
pub struct RunViewerScreen {
    path: PathBuf,
    record: RunRecord,
    map: CoverageMap,
    covered: usize,
    selected: usize,
    should_exit: bool,
}

impl RunViewerScreen {
    pub fn new(path: PathBuf, record: RunRecord) -> Self {
        let map = CoverageMap::from_config(&record.best.sensors, &record.config);
        let covered = CoverageFitness::from_config(&record.config)
            .coverage(&record.best.sensors)
            .covered_count();
        Self {
            path,
            record,
            map,
            covered,
            selected: 0,
            should_exit: false,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let [top_area, mid_area, bottom_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(frame.area());

        let config = &self.record.config;
        let summary = Paragraph::new(vec![
            Line::from(format!(
                "Best fitness: {:.3}   Covered: {}/{}",
                self.record.best.fitness,
                self.covered,
                config.cell_count(),
            )),
            Line::from(format!(
                "Grid: {}x{}   Sensors: {}   Radius: {}   Alpha: {}",
                config.width, config.height, config.num_sensors, config.radius, config.alpha,
            )),
            Line::from(format!(
                "Seed: {}   Trained at: {}",
                self.record.seed, self.record.trained_at,
            )),
        ])
        .block(
            BlockWidget::bordered()
                .title(format!("Run: {}", self.path.display()))
                .padding(Padding::horizontal(1)),
        );

        let map_display = self.map_display();
        let [map_area, sensors_area, history_area] = Layout::horizontal([
            Constraint::Length(map_display.width()),
            Constraint::Length(16),
            Constraint::Fill(1),
        ])
        .areas(mid_area);
        let [map_area, _] =
            Layout::vertical([Constraint::Length(map_display.height()), Constraint::Fill(1)])
                .areas(map_area);

        let items = self
            .record
            .best
            .sensors
            .iter()
            .enumerate()
            .map(|(i, point)| ListItem::new(format!("{i:2}: {point}")));
        let sensors = List::new(items)
            .block(BlockWidget::bordered().title("Sensors"))
            .highlight_style(style::SELECTED);
        let mut list_state = ListState::default().with_selected(Some(self.selected));

        let history = FitnessHistoryDisplay::new(&self.record.fitness_history)
            .block(BlockWidget::bordered().title("Fitness history"));

        let help = Paragraph::new(
            Line::from("j/k or ↓/↑ (select sensor) | g/Home (First) | G/End (Last) | q/Esc (Quit)")
                .centered(),
        )
        .style(Style::new().fg(Color::DarkGray))
        .block(BlockWidget::bordered());

        frame.render_widget(summary, top_area);
        frame.render_widget(map_display, map_area);
        frame.render_stateful_widget(sensors, sensors_area, &mut list_state);
        frame.render_widget(history, history_area);
        frame.render_widget(help, bottom_area);
    }

    fn map_display(&self) -> CoverageMapDisplay<'_> {
        let display = CoverageMapDisplay::new(&self.map).block(BlockWidget::bordered().title("Map"));
        match self.record.best.sensors.get(self.selected) {
            Some(point) => display.selected(*point),
            None => display,
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        if let Some(event) = event.as_key_event()
            && event.kind == KeyEventKind::Press
        {
            match event.code {
                KeyCode::Char('j') | KeyCode::Down => self.select_next(),
                KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
                KeyCode::Char('g') | KeyCode::Home => self.selected = 0,
                KeyCode::Char('G') | KeyCode::End => {
                    self.selected = self.record.best.sensors.len().saturating_sub(1);
                }
                KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
                _ => {}
            }
        }
    }

    fn select_next(&mut self) {
        let len = self.record.best.sensors.len();
        if len == 0 {
            return;
        }
        self.selected = usize::min(self.selected + 1, len - 1);
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
