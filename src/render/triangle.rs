//! Triangles.

use crate::image::Image;

impl Image<'_> {
    /// Draw the three edges of a triangle as lines.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        dash: u32,
        color: u8,
    ) {
        self.draw_line(x1, y1, x2, y2, dash, color);
        self.draw_line(x2, y2, x3, y3, dash, color);
        self.draw_line(x3, y3, x1, y1, dash, color);
    }

    /// Fill a triangle with horizontal spans.
    ///
    /// A general triangle is split at its middle vertex into a flat-bottom
    /// and a flat-top half; the shared row is drawn by the first half only,
    /// so no pixel is written twice.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_triangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        color: u8,
    ) {
        if self.skips(color) {
            return;
        }

        let mut vertices = [(x1, y1), (x2, y2), (x3, y3)];
        vertices.sort_by_key(|&(_, y)| y);
        let [(x1, y1), (x2, y2), (x3, y3)] = vertices;

        if y2 == y3 {
            self.fill_flat_side(x1, y1, x2, y2, x3, color, false);
        } else if y1 == y2 {
            self.fill_flat_side(x3, y3, x1, y1, x2, color, false);
        } else {
            let slope = (x3 - x1) as f32 / (y3 - y1) as f32;
            let x4 = (x3 as f32 - slope * (y3 - y2) as f32).round() as i32;
            self.fill_flat_side(x1, y1, x2, y2, x4, color, false);
            self.fill_flat_side(x3, y3, x2, y2, x4, color, true);
        }
    }

    /// Fill from apex `(x1, y1)` to the horizontal edge `x2..=x3` on row `y2`.
    ///
    /// With `skip_last` the edge row itself is left out.
    #[allow(clippy::too_many_arguments)]
    fn fill_flat_side(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        color: u8,
        skip_last: bool,
    ) {
        let (x2, x3) = if x2 > x3 { (x3, x2) } else { (x2, x3) };
        let (w, h) = self.extent();

        let (mut x_start, mut x_end) = (x1 as f32, x1 as f32);
        let (mut slope_a, mut slope_b) = (0.0, 0.0);
        if y1 == y2 {
            // Degenerate: a single row.
            x_start = x_start.min(x2 as f32);
            x_end = x_end.max(x3 as f32);
        } else {
            let height = (y2 - y1).abs() as f32;
            slope_a = (x2 - x1) as f32 / height;
            slope_b = (x3 - x1) as f32 / height;
        }

        let step = if y1 > y2 { -1 } else { 1 };
        let y_stop = if skip_last { y2 } else { y2 + step };
        let mut prev: Option<(f32, f32)> = None;
        let mut y = y1;

        while y != y_stop {
            if (step > 0 && y >= h) || (step < 0 && y < 0) {
                break;
            }

            // Steep edges can jump more than a pixel per row; stretch the
            // span back to the previous one so the fill stays connected.
            let (mut lo, mut hi) = (x_start, x_end);
            if let Some((prev_lo, prev_hi)) = prev {
                if prev_hi + 1.0 < lo {
                    lo = prev_hi + 1.0;
                } else if prev_lo - 1.0 > hi {
                    hi = prev_lo - 1.0;
                }
            }

            if y >= 0 && y < h {
                let from = (lo.round() as i32).max(0);
                let to = (hi.round() as i32).min(w - 1);
                for x in from..=to {
                    self.draw_point(x, y, color);
                }
            }

            prev = Some((lo, hi));
            x_start += slope_a;
            x_end += slope_b;
            y += step;
        }
    }
}
