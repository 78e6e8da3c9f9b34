use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::{COLOR_BACKGROUND, COLOR_SNAKE_HEAD};
use crate::game::EndReason;

/// Draws the end-of-game message as a centered popup.
pub fn render_end_menu(frame: &mut Frame<'_>, area: Rect, reason: EndReason) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let title_color = if reason.is_victory() {
        COLOR_SNAKE_HEAD
    } else {
        Color::White
    };

    let lines = vec![
        Line::from(end_message(reason)).style(
            Style::new()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(end_cause(reason)),
        Line::from(""),
        Line::from("[Enter] Exit"),
        Line::from("[Q]/[Esc] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().bg(COLOR_BACKGROUND))
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

/// Headline shown when the game ends.
#[must_use]
pub fn end_message(reason: EndReason) -> &'static str {
    match reason {
        EndReason::GridFilled => "Well congrats! You won the snake game!",
        EndReason::SelfCollision | EndReason::WallCollision => "Game Over!",
    }
}

fn end_cause(reason: EndReason) -> &'static str {
    match reason {
        EndReason::SelfCollision => "Cause: hit yourself",
        EndReason::WallCollision => "Cause: hit wall",
        EndReason::GridFilled => "The snake fills the whole grid",
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use crate::game::EndReason;

    use super::end_message;

    #[test]
    fn victory_and_defeat_have_distinct_messages() {
        assert_eq!(end_message(EndReason::WallCollision), "Game Over!");
        assert_eq!(end_message(EndReason::SelfCollision), "Game Over!");
        assert_eq!(
            end_message(EndReason::GridFilled),
            "Well congrats! You won the snake game!"
        );
    }
}
