//! Rasterization primitives for pif.
//!
//! Each submodule adds drawing methods to [`crate::Image`]; every one of
//! them bottoms out in `Image::draw_point`, so clipping, transparency
//! skipping and shaders apply uniformly.

mod blit;
mod circle;
mod line;
mod png;
mod rect;
mod transform;
mod triangle;

pub use png::{read_png, scale_pixels, write_png};

/// Dash pattern state: alternates runs of `period` skipped and drawn points,
/// starting with a skipped run.
///
/// A period of 0 draws every point.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Dash {
    period: u64,
    count: u64,
}

impl Dash {
    pub(crate) fn new(period: u32) -> Self {
        Self {
            period: period as u64,
            count: 0,
        }
    }

    /// Advance by one point; returns whether that point is drawn.
    pub(crate) fn step(&mut self) -> bool {
        let index = self.count;
        self.count = self.count.saturating_add(1);
        self.period == 0 || (index / self.period) % 2 == 1
    }

    /// Advance past `n` points without drawing them.
    pub(crate) fn skip(&mut self, n: u64) {
        self.count = self.count.saturating_add(n);
    }
}
