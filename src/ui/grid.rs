//! Geometry of the board on screen and the mapping from mouse positions
//! back to cells.

use ratatui::layout::Rect;

use crate::game::SIZE;

/// Placement of the 3x3 grid inside a terminal area.
///
/// The grid occupies a square region of side `S` rows: three cells
/// separated and surrounded by four gaps of `S / 16`. Terminal characters
/// are about twice as tall as they are wide, so every horizontal length is
/// doubled to keep cells square on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    x: u16,
    y: u16,
    cell_w: u16,
    cell_h: u16,
    gap_w: u16,
    gap_h: u16,
}

impl GridLayout {
    /// Fit the largest grid into `area`, centred. `None` if even one-row
    /// cells do not fit.
    pub fn fit(area: Rect) -> Option<Self> {
        let side = area.height.min(area.width / 2);
        let gap_h = (side / 16).max(1);
        let cell_h = side.saturating_sub(4 * gap_h) / SIZE as u16;
        if cell_h == 0 {
            return None;
        }

        let layout = GridLayout {
            x: 0,
            y: 0,
            cell_w: cell_h * 2,
            cell_h,
            gap_w: gap_h * 2,
            gap_h,
        };
        let (width, height) = (layout.width(), layout.height());

        Some(GridLayout {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            ..layout
        })
    }

    fn width(&self) -> u16 {
        SIZE as u16 * self.cell_w + (SIZE as u16 + 1) * self.gap_w
    }

    fn height(&self) -> u16 {
        SIZE as u16 * self.cell_h + (SIZE as u16 + 1) * self.gap_h
    }

    /// The whole grid, outer margins included
    pub fn area(&self) -> Rect {
        Rect::new(self.x, self.y, self.width(), self.height())
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let row = row as u16;
        let col = col as u16;
        Rect::new(
            self.x + self.gap_w + col * (self.cell_w + self.gap_w),
            self.y + self.gap_h + row * (self.cell_h + self.gap_h),
            self.cell_w,
            self.cell_h,
        )
    }

    /// Map a terminal position to the `(row, col)` of the cell under it.
    /// Gaps and anything outside the grid map to `None`.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        let c = axis_index(column, self.x, self.cell_w, self.gap_w)?;
        let r = axis_index(row, self.y, self.cell_h, self.gap_h)?;
        Some((r, c))
    }
}

/// Index of the cell covering `pos` along one axis
fn axis_index(pos: u16, origin: u16, cell: u16, gap: u16) -> Option<usize> {
    let offset = pos.checked_sub(origin)?.checked_sub(gap)?;
    let stride = cell + gap;
    let index = offset / stride;
    if index as usize >= SIZE || offset % stride >= cell {
        return None;
    }
    Some(index as usize)
}
