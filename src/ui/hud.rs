use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::{Shape, COLOR_BACKGROUND, COLOR_HUD};
use crate::game::GameState;

/// Presentation values that live outside the game state.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    /// Current ticks per second.
    pub tick_rate: f64,
    pub shape: Shape,
}

/// Renders the status line and returns the remaining area below it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: &HudInfo) -> Rect {
    let [status_area, _gap, play_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(status_line(state.snake().len(), info.tick_rate))
            .alignment(Alignment::Center)
            .style(Style::new().fg(COLOR_HUD).bg(COLOR_BACKGROUND)),
        status_area,
    );

    play_area
}

/// Formats the snake size and the current tick rate.
#[must_use]
pub fn status_line(snake_len: usize, tick_rate: f64) -> Line<'static> {
    Line::from(format!("Snake Size = {snake_len}  ----  FPS = {tick_rate:.1}"))
}

#[cfg(test)]
mod tests {
    use super::status_line;

    #[test]
    fn status_line_shows_size_and_rate() {
        let line = status_line(7, 6.666);

        assert_eq!(line.to_string(), "Snake Size = 7  ----  FPS = 6.7");
    }
}
