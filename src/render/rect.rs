//! Axis-aligned rectangles.

use crate::image::Image;
use crate::types::Rect;

use super::Dash;

/// One side of a rectangle ring: a fixed row or column.
#[derive(Debug, Clone, Copy)]
enum Edge {
    Row(i64),
    Column(i64),
}

impl Image<'_> {
    /// Draw the border ring of `rect`: exactly the outermost pixels that
    /// [`Image::fill_rect`] would cover, each written once.
    ///
    /// The ring is walked clockwise from the top-left corner, so `dash`
    /// runs continue around corners. Off-image stretches are skipped in
    /// one step.
    pub fn draw_rect(&mut self, rect: Rect, dash: u32, color: u8) {
        if self.skips(color) || rect.is_empty() {
            return;
        }

        let left = rect.x as i64;
        let top = rect.y as i64;
        let right = left + rect.w as i64 - 1;
        let bottom = top + rect.h as i64 - 1;
        let mut dash = Dash::new(dash);

        self.draw_edge(&mut dash, Edge::Row(top), left, right, true, color);
        self.draw_edge(&mut dash, Edge::Column(right), top + 1, bottom, true, color);
        if bottom > top {
            self.draw_edge(&mut dash, Edge::Row(bottom), left, right - 1, false, color);
        }
        if right > left {
            self.draw_edge(&mut dash, Edge::Column(left), top + 1, bottom - 1, false, color);
        }
    }

    /// Walk `lo..=hi` along one edge, upwards or downwards, drawing only the
    /// on-image points. The dash advances over every point either way.
    fn draw_edge(
        &mut self,
        dash: &mut Dash,
        edge: Edge,
        lo: i64,
        hi: i64,
        ascending: bool,
        color: u8,
    ) {
        if lo > hi {
            return;
        }
        let len = (hi - lo + 1) as u64;

        let (w, h) = self.extent();
        let (fixed, fixed_limit, limit) = match edge {
            Edge::Row(y) => (y, h as i64, w as i64),
            Edge::Column(x) => (x, w as i64, h as i64),
        };
        let (vis_lo, vis_hi) = (lo.max(0), hi.min(limit - 1));
        if !(0..fixed_limit).contains(&fixed) || vis_lo > vis_hi {
            dash.skip(len);
            return;
        }

        let (head, tail) = if ascending {
            (vis_lo - lo, hi - vis_hi)
        } else {
            (hi - vis_hi, vis_lo - lo)
        };
        dash.skip(head as u64);
        for i in 0..=(vis_hi - vis_lo) {
            let along = if ascending { vis_lo + i } else { vis_hi - i };
            if dash.step() {
                let (x, y) = match edge {
                    Edge::Row(_) => (along, fixed),
                    Edge::Column(_) => (fixed, along),
                };
                self.draw_point(x as i32, y as i32, color);
            }
        }
        dash.skip(tail as u64);
    }

    /// Fill `rect`, clipped to the image.
    pub fn fill_rect(&mut self, rect: Rect, color: u8) {
        if self.skips(color) || rect.is_empty() {
            return;
        }

        let (w, h) = self.extent();
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.right().min(w - 1);
        let y1 = rect.bottom().min(h - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                self.draw_point(x, y, color);
            }
        }
    }
}
