use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::{
    GridSize, Shape, CELL_WIDTH, COLOR_BACKGROUND, COLOR_EMPTY_CELL, COLOR_FOOD, COLOR_HUD,
    COLOR_SNAKE_BODY, COLOR_SNAKE_HEAD, COLOR_WALL,
};
use crate::game::GameState;
use crate::grid::{Cell, Grid, HeadRounding};
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::render_end_menu;

const GLYPH_EMPTY: &str = "·";
const GLYPH_SQUARE: &str = "██";
const GLYPH_CIRCLE: &str = "⬤";
const GLYPH_HEAD_UP: &str = "◢◣";
const GLYPH_HEAD_DOWN: &str = "◥◤";
const GLYPH_HEAD_LEFT: &str = "◖█";
const GLYPH_HEAD_RIGHT: &str = "█◗";

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, hud_info: &HudInfo) {
    let area = frame.area();
    frame.render_widget(
        Block::new().style(Style::new().bg(COLOR_BACKGROUND)),
        area,
    );

    let play_area = render_hud(frame, area, state, hud_info);

    let bounds = state.grid().bounds();
    let Some(board) = board_rect(play_area, bounds) else {
        render_too_small(frame, play_area, bounds);
        return;
    };

    let walls = Block::bordered()
        .border_type(BorderType::Thick)
        .border_style(Style::new().fg(COLOR_WALL).bg(COLOR_BACKGROUND));
    let inner = walls.inner(board);
    frame.render_widget(walls, board);

    render_grid(frame, inner, state.grid(), hud_info.shape);

    if let Some(reason) = state.end_reason() {
        render_end_menu(frame, area, reason);
    }
}

fn render_grid(frame: &mut Frame<'_>, inner: Rect, grid: &Grid, shape: Shape) {
    let buffer = frame.buffer_mut();

    for (row, cells) in grid.rows().enumerate() {
        let y = inner.y + row as u16;
        for (column, cell) in cells.iter().enumerate() {
            let x = inner.x + column as u16 * CELL_WIDTH;
            let (glyph, style) = cell_appearance(*cell, shape);
            buffer.set_string(x, y, fit_cell(glyph), style);
        }
    }
}

/// Picks the glyph and style drawn for one classified cell.
#[must_use]
pub fn cell_appearance(cell: Cell, shape: Shape) -> (&'static str, Style) {
    let base = Style::new().bg(COLOR_BACKGROUND);
    let filled = match shape {
        Shape::Square => GLYPH_SQUARE,
        Shape::Circle => GLYPH_CIRCLE,
    };

    match cell {
        Cell::Empty => (GLYPH_EMPTY, base.fg(COLOR_EMPTY_CELL)),
        Cell::Body => (filled, base.fg(COLOR_SNAKE_BODY)),
        Cell::Food => (filled, base.fg(COLOR_FOOD)),
        Cell::Head { facing } => {
            let glyph = match shape {
                Shape::Square => head_glyph(HeadRounding::facing(facing)),
                Shape::Circle => GLYPH_CIRCLE,
            };
            (
                glyph,
                base.fg(COLOR_SNAKE_HEAD).add_modifier(Modifier::BOLD),
            )
        }
    }
}

fn head_glyph(rounding: HeadRounding) -> &'static str {
    match rounding {
        HeadRounding {
            top_left: true,
            top_right: true,
            ..
        } => GLYPH_HEAD_UP,
        HeadRounding {
            bottom_left: true,
            bottom_right: true,
            ..
        } => GLYPH_HEAD_DOWN,
        HeadRounding {
            top_left: true,
            bottom_left: true,
            ..
        } => GLYPH_HEAD_LEFT,
        HeadRounding {
            top_right: true,
            bottom_right: true,
            ..
        } => GLYPH_HEAD_RIGHT,
        _ => GLYPH_SQUARE,
    }
}

/// Pads or trims `glyph` to exactly one cell of terminal columns.
#[must_use]
pub fn fit_cell(glyph: &str) -> String {
    let target = usize::from(CELL_WIDTH);
    let mut fitted = String::new();
    let mut width = 0;

    for ch in glyph.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > target {
            break;
        }
        fitted.push(ch);
        width += ch_width;
    }

    fitted.push_str(&" ".repeat(target - width));
    debug_assert_eq!(fitted.width(), target);
    fitted
}

/// Centers the walled board inside `area`, or `None` if it does not fit.
#[must_use]
pub fn board_rect(area: Rect, bounds: GridSize) -> Option<Rect> {
    let width = bounds.width.checked_mul(CELL_WIDTH)?.checked_add(2)?;
    let height = bounds.height.checked_add(2)?;
    if width > area.width || height > area.height {
        return None;
    }

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    Some(board)
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, bounds: GridSize) {
    let needed = format!(
        "Terminal too small: need {}x{} for a {}x{} grid",
        bounds.width * CELL_WIDTH + 2,
        bounds.height + 4,
        bounds.width,
        bounds.height
    );

    frame.render_widget(
        Paragraph::new(Line::from(needed))
            .alignment(Alignment::Center)
            .style(Style::new().fg(COLOR_HUD).bg(COLOR_BACKGROUND)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;
    use unicode_width::UnicodeWidthStr;

    use crate::config::{GridSize, Shape};
    use crate::grid::Cell;
    use crate::input::Direction;

    use super::{board_rect, cell_appearance, fit_cell, GLYPH_HEAD_RIGHT, GLYPH_HEAD_UP};

    #[test]
    fn fitted_glyphs_are_exactly_one_cell_wide() {
        for glyph in ["·", "██", "⬤", "◢◣", "█◗", "abc"] {
            assert_eq!(fit_cell(glyph).width(), 2, "glyph {glyph:?}");
        }
    }

    #[test]
    fn square_head_points_where_it_is_going() {
        let (right, _) = cell_appearance(
            Cell::Head {
                facing: Direction::Right,
            },
            Shape::Square,
        );
        let (up, _) = cell_appearance(
            Cell::Head {
                facing: Direction::Up,
            },
            Shape::Square,
        );

        assert_eq!(right, GLYPH_HEAD_RIGHT);
        assert_eq!(up, GLYPH_HEAD_UP);
    }

    #[test]
    fn circle_shape_draws_round_head() {
        let (glyph, _) = cell_appearance(
            Cell::Head {
                facing: Direction::Left,
            },
            Shape::Circle,
        );

        assert_eq!(glyph, "⬤");
    }

    #[test]
    fn board_is_centered_when_it_fits() {
        let area = Rect::new(0, 0, 40, 20);
        let board = board_rect(
            area,
            GridSize {
                width: 12,
                height: 12,
            },
        )
        .expect("board should fit");

        assert_eq!(board.width, 26);
        assert_eq!(board.height, 14);
        assert_eq!(board.x, 7);
        assert_eq!(board.y, 3);
    }

    #[test]
    fn board_does_not_fit_small_area() {
        let area = Rect::new(0, 0, 20, 10);

        assert!(board_rect(
            area,
            GridSize {
                width: 12,
                height: 12
            }
        )
        .is_none());
    }
}
