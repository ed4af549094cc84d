use std::f64::consts::{PI, SQRT_2};

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line, Points},
        Block,
    },
    Frame,
};

use super::grid::GridLayout;
use crate::config::DisplayConfig;
use crate::game::{Cell, Flash, GameState, SIZE};

pub const COLOR_BACKGROUND: Color = Color::Rgb(18, 18, 18);
pub const COLOR_FOREGROUND: Color = Color::Rgb(255, 255, 255);
pub const COLOR_EMPTY: Color = Color::Rgb(48, 48, 48);
pub const COLOR_ERROR: Color = Color::Rgb(205, 75, 0);
pub const COLOR_WIN: Color = Color::Rgb(0, 162, 237);

// Each cell is drawn in canvas units spanning [-1, 1] on both axes.
const NOUGHT_INNER_RADIUS: f64 = 2.0 / 3.0;
const CROSS_THICKNESS: f64 = 0.5;

/// The flash a cell actually shows under the given display options.
pub fn visible_flash(flash: Flash, display: &DisplayConfig) -> Flash {
    match flash {
        Flash::Win if display.highlight_wins => Flash::Win,
        Flash::Error if display.flag_errors => Flash::Error,
        _ => Flash::None,
    }
}

/// Render the board grid, one canvas per cell.
pub fn render_board(frame: &mut Frame, state: &GameState, display: &DisplayConfig, layout: &GridLayout) {
    frame.render_widget(
        Block::default().style(Style::default().bg(COLOR_BACKGROUND)),
        layout.area(),
    );

    for row in 0..SIZE {
        for col in 0..SIZE {
            let background = match visible_flash(state.flash(row, col), display) {
                Flash::None => COLOR_EMPTY,
                Flash::Error => COLOR_ERROR,
                Flash::Win => COLOR_WIN,
            };
            render_cell(
                frame,
                state.board().get(row, col),
                background,
                layout.cell_rect(row, col),
            );
        }
    }
}

fn render_cell(frame: &mut Frame, cell: Cell, background: Color, area: Rect) {
    // Braille dots per cell: 2 wide, 4 tall
    let dots_w = usize::from(area.width) * 2;
    let dots_h = usize::from(area.height) * 4;

    let ring = match cell {
        Cell::Nought => nought_points(dots_w, dots_h),
        _ => Vec::new(),
    };
    let bars = match cell {
        Cell::Cross => cross_lines(dots_h),
        _ => Vec::new(),
    };

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(background)
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            if !ring.is_empty() {
                ctx.draw(&Points {
                    coords: &ring,
                    color: COLOR_FOREGROUND,
                });
            }
            for line in &bars {
                ctx.draw(line);
            }
        });

    frame.render_widget(canvas, area);
}

/// Sample a `dots_w` x `dots_h` lattice and keep the points of the ring
/// between the inner radius and the cell edge.
fn nought_points(dots_w: usize, dots_h: usize) -> Vec<(f64, f64)> {
    let inner = NOUGHT_INNER_RADIUS * NOUGHT_INNER_RADIUS;
    let mut points = Vec::new();

    for w in 0..dots_w {
        for h in 0..dots_h {
            let x = -1.0 + (w as f64 + 0.5) * 2.0 / dots_w as f64;
            let y = -1.0 + (h as f64 + 0.5) * 2.0 / dots_h as f64;
            let t = x * x + y * y;
            if t <= 1.0 && t > inner {
                points.push((x, y));
            }
        }
    }

    points
}

/// Two bars crossing at the cell centre, each a bundle of parallel lines
/// rotated by +45 and -45 degrees.
fn cross_lines(dots_h: usize) -> Vec<Line> {
    // A bar this long just reaches the cell corners once rotated
    let half_len = (2.0 * SQRT_2 - CROSS_THICKNESS) / 2.0;
    let strands = ((CROSS_THICKNESS * dots_h as f64 / 2.0).ceil() as usize).max(1);

    let mut lines = Vec::with_capacity(strands * 2);
    for angle in [45.0, -45.0] {
        for i in 0..=strands {
            let offset = -CROSS_THICKNESS / 2.0 + CROSS_THICKNESS * i as f64 / strands as f64;
            let (x1, y1) = rotate((-half_len, offset), (0.0, 0.0), angle);
            let (x2, y2) = rotate((half_len, offset), (0.0, 0.0), angle);
            lines.push(Line::new(x1, y1, x2, y2, COLOR_FOREGROUND));
        }
    }

    lines
}

fn rad(angle: f64) -> f64 {
    angle * PI / 180.0
}

/// Rotate `pos` around `origin` by `angle` degrees, counter-clockwise.
pub fn rotate(pos: (f64, f64), origin: (f64, f64), angle: f64) -> (f64, f64) {
    let radians = rad(angle);
    let (sin, cos) = radians.sin_cos();

    let px = pos.0 - origin.0;
    let py = pos.1 - origin.1;

    (
        px * cos - py * sin + origin.0,
        px * sin + py * cos + origin.1,
    )
}
