use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{coverage_map_display::*, fitness_history_display::*};

mod coverage_map_display;
mod fitness_history_display;

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    pub const UNCOVERED: Style = Style::new().fg(Color::DarkGray);
    pub const COVERED: Style = Style::new().fg(Color::Green);
    pub const SENSOR: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    pub const SELECTED: Style = Style::new()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    pub const HISTORY: Style = Style::new().fg(Color::Cyan);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
