//! Bresenham lines.

use crate::image::Image;

use super::Dash;

impl Image<'_> {
    /// Draw a line between two points, both inclusive.
    ///
    /// `dash` > 0 alternates skipped and drawn runs of `dash` points,
    /// starting with a skipped run; 0 draws a solid line. Only the part of
    /// the major axis inside the image is walked.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, dash: u32, color: u8) {
        if self.skips(color) {
            return;
        }

        let (mut x1, mut y1, mut x2, mut y2) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);

        // Walk along the longer axis.
        let steep = (y2 - y1).abs() > (x2 - x1).abs();
        if steep {
            std::mem::swap(&mut x1, &mut y1);
            std::mem::swap(&mut x2, &mut y2);
        }
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
            std::mem::swap(&mut y1, &mut y2);
        }

        let (w, h) = self.extent();
        let limit = i64::from(if steep { h } else { w });
        let start = x1.max(0);
        let end = x2.min(limit - 1);
        if start > end {
            return;
        }

        let dist_x = x2 - x1;
        let dist_y = (y2 - y1).abs();
        let step_y = if y1 < y2 { 1 } else { -1 };
        let mut err = dist_x / 2;
        let mut y = y1;
        let mut dash = Dash::new(dash);

        // Jump the error term over the clipped-off head.
        let skipped = start - x1;
        if skipped > 0 {
            dash.skip(skipped as u64);
            let owed = skipped as i128 * dist_y as i128 - err as i128;
            let rises = if owed > 0 {
                (owed + dist_x as i128 - 1) / dist_x as i128
            } else {
                0
            };
            y += step_y * rises as i64;
            err = (err as i128 - skipped as i128 * dist_y as i128 + rises * dist_x as i128) as i64;
        }

        for x in start..=end {
            if dash.step() {
                if let Ok(y) = i32::try_from(y) {
                    let x = x as i32;
                    if steep {
                        self.draw_point(y, x, color);
                    } else {
                        self.draw_point(x, y, color);
                    }
                }
            }

            err -= dist_y;
            if err < 0 {
                y += step_y;
                err += dist_x;
            }
        }
    }
}
