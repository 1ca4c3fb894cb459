//! Rectangles under a 2x2 linear transform.

use crate::image::Image;
use crate::types::{Mat2, Rect};

/// Destination-pixel corners of `rect` after transforming around the pivot
/// `(rect.x + cx, rect.y + cy)`.
///
/// Corners are the centres of the rectangle's corner pixels, in the order
/// top-left, bottom-left, bottom-right, top-right. The identity transform
/// returns the corner pixels themselves.
pub(crate) fn transform_corners(rect: Rect, mat: &Mat2, cx: i32, cy: i32) -> [(i32, i32); 4] {
    let pivot_x = (rect.x + cx) as f32;
    let pivot_y = (rect.y + cy) as f32;

    [
        (rect.x, rect.y),
        (rect.x, rect.bottom()),
        (rect.right(), rect.bottom()),
        (rect.right(), rect.y),
    ]
    .map(|(x, y)| {
        let (dx, dy) = mat.apply(x as f32 + 0.5 - pivot_x, y as f32 + 0.5 - pivot_y);
        (
            (dx + pivot_x - 0.5).round() as i32,
            (dy + pivot_y - 0.5).round() as i32,
        )
    })
}

impl Image<'_> {
    /// Draw the outline of `rect` transformed by `mat` around `(rect.x + cx, rect.y + cy)`.
    pub fn draw_transform_rect(
        &mut self,
        rect: Rect,
        dash: u32,
        color: u8,
        mat: &Mat2,
        cx: i32,
        cy: i32,
    ) {
        if self.skips(color) || rect.is_empty() {
            return;
        }

        let corners = transform_corners(rect, mat, cx, cy);
        for i in 0..4 {
            let (x1, y1) = corners[i];
            let (x2, y2) = corners[(i + 1) % 4];
            self.draw_line(x1, y1, x2, y2, dash, color);
        }
    }

    /// Fill `rect` transformed by `mat` around `(rect.x + cx, rect.y + cy)`,
    /// as two triangles sharing the top-right/bottom-left diagonal.
    pub fn fill_transform_rect(&mut self, rect: Rect, color: u8, mat: &Mat2, cx: i32, cy: i32) {
        if self.skips(color) || rect.is_empty() {
            return;
        }

        let [p0, p1, p2, p3] = transform_corners(rect, mat, cx, cy);
        self.fill_triangle(p0.0, p0.1, p1.0, p1.1, p3.0, p3.1, color);
        self.fill_triangle(p2.0, p2.1, p1.0, p1.1, p3.0, p3.1, color);
    }

    /// [`Image::draw_transform_rect`] with a rotation by `angle` radians.
    pub fn draw_rotate_rect(
        &mut self,
        rect: Rect,
        dash: u32,
        color: u8,
        angle: f32,
        cx: i32,
        cy: i32,
    ) {
        self.draw_transform_rect(rect, dash, color, &Mat2::rotation(angle), cx, cy);
    }

    /// [`Image::fill_transform_rect`] with a rotation by `angle` radians.
    pub fn fill_rotate_rect(&mut self, rect: Rect, color: u8, angle: f32, cx: i32, cy: i32) {
        self.fill_transform_rect(rect, color, &Mat2::rotation(angle), cx, cy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity_corners() {
        let rect = Rect::new(2, 3, 4, 5);
        assert_eq!(
            transform_corners(rect, &Mat2::IDENTITY, 1, 1),
            [(2, 3), (2, 7), (5, 7), (5, 3)]
        );
    }

    #[test]
    fn test_identity_fill_matches_fill_rect() {
        let rect = Rect::new(1, 2, 6, 4);
        let mut transformed = Image::new(10, 10);
        let mut plain = Image::new(10, 10);
        transformed.fill_transform_rect(rect, 3, &Mat2::IDENTITY, 3, 2);
        plain.fill_rect(rect, 3);
        assert_eq!(transformed, plain);
    }

    #[test]
    fn test_identity_outline_matches_draw_rect() {
        let rect = Rect::new(1, 1, 5, 4);
        let mut transformed = Image::new(8, 8);
        let mut plain = Image::new(8, 8);
        transformed.draw_transform_rect(rect, 0, 2, &Mat2::IDENTITY, 0, 0);
        plain.draw_rect(rect, 0, 2);
        assert_eq!(transformed, plain);
    }

    #[test]
    fn test_quarter_turn_of_square_is_square() {
        let rect = Rect::new(2, 2, 4, 4);
        let mut rotated = Image::new(8, 8);
        let mut plain = Image::new(8, 8);
        rotated.fill_rotate_rect(rect, 1, FRAC_PI_2, 2, 2);
        plain.fill_rect(rect, 1);
        assert_eq!(rotated, plain);
    }

    #[test]
    fn test_quarter_turn_swaps_extent() {
        // A 6x2 bar turned about its centre becomes a 2x6 bar.
        let rect = Rect::new(1, 3, 6, 2);
        let mut img = Image::new(8, 8);
        img.fill_rotate_rect(rect, 1, FRAC_PI_2, 3, 1);

        let mut expected = Image::new(8, 8);
        expected.fill_rect(Rect::new(3, 1, 2, 6), 1);
        assert_eq!(img, expected);
    }

    #[test]
    fn test_rotated_outline_stays_near_fill() {
        let rect = Rect::new(4, 4, 8, 6);
        let mut outline = Image::new(20, 20);
        let mut filled = Image::new(20, 20);
        outline.draw_rotate_rect(rect, 0, 1, 0.4, 4, 3);
        filled.fill_rotate_rect(rect, 1, 0.4, 4, 3);

        let lit = |img: &Image<'_>| img.pixels().iter().filter(|&&p| p != 0).count();
        assert!(lit(&outline) > 0);
        assert!(lit(&outline) < lit(&filled));
        // Edges and spans round differently; allow one pixel of slack.
        for y in 0..20 {
            for x in 0..20 {
                if outline.get(x, y) == Some(1) {
                    let near = (-1..=1)
                        .flat_map(|dy| (-1..=1).map(move |dx| (x + dx, y + dy)))
                        .any(|(nx, ny)| filled.get(nx, ny) == Some(1));
                    assert!(near, "({x}, {y}) far from fill");
                }
            }
        }
    }

    #[test]
    fn test_singular_transform_collapses() {
        let mut img = Image::new(8, 8);
        let flatten = Mat2::new([[1.0, 0.0], [0.0, 0.0]]);
        img.fill_transform_rect(Rect::new(0, 0, 8, 8), 1, &flatten, 0, 3);
        // Everything lands on the pivot row.
        for y in 0..8 {
            let row = &img.pixels()[y * 8..(y + 1) * 8];
            if y == 3 {
                assert!(row.iter().all(|&p| p == 1));
            } else {
                assert!(row.iter().all(|&p| p == 0));
            }
        }
    }
}
