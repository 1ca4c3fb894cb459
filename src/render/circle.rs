//! Circles.

use crate::image::Image;

use super::Dash;

impl Image<'_> {
    /// Draw a circle outline centred on `(cx, cy)` with the midpoint algorithm.
    ///
    /// Points are emitted in eight-way symmetric groups and `dash` counts
    /// groups, so a dashed outline keeps its symmetry. A radius of 1 is a
    /// single point, 0 or less draws nothing.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, r: i32, dash: u32, color: u8) {
        if self.skips(color) || r <= 0 {
            return;
        }

        let mut x = r - 1;
        let mut y = 0;
        let mut dx = 1;
        let mut dy = 1;
        let mut err = dx - (r << 1);
        let mut dash = Dash::new(dash);

        while x >= y {
            if dash.step() {
                let octants = [
                    (cx + x, cy + y),
                    (cx + y, cy + x),
                    (cx - y, cy + x),
                    (cx - x, cy + y),
                    (cx - x, cy - y),
                    (cx - y, cy - x),
                    (cx + y, cy - x),
                    (cx + x, cy - y),
                ];
                for (px, py) in octants {
                    self.draw_point(px, py, color);
                }
            }

            if err <= 0 {
                y += 1;
                err += dy;
                dy += 2;
            }
            if err > 0 {
                x -= 1;
                dx += 2;
                err += dx - (r << 1);
            }
        }
    }

    /// Fill every point strictly closer than `r` to `(cx, cy)`.
    ///
    /// Each covered pixel is written exactly once.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, color: u8) {
        if self.skips(color) || r <= 0 {
            return;
        }

        let (w, h) = self.extent();
        let r2 = r as i64 * r as i64;

        let y0 = cy.saturating_sub(r - 1).max(0);
        let y1 = cy.saturating_add(r - 1).min(h - 1);
        let x0 = cx.saturating_sub(r - 1).max(0);
        let x1 = cx.saturating_add(r - 1).min(w - 1);

        for y in y0..=y1 {
            let dy = (y - cy) as i64;
            for x in x0..=x1 {
                let dx = (x - cx) as i64;
                if dx * dx + dy * dy < r2 {
                    self.draw_point(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::image::Image;

    fn ascii(img: &Image<'_>) -> String {
        img.pixels()
            .chunks(img.width())
            .map(|row| {
                row.iter()
                    .map(|&p| if p == 0 { '.' } else { '#' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_fill_circle_shape() {
        let mut img = Image::new(9, 9);
        img.fill_circle(4, 4, 4, 1);
        insta::assert_snapshot!(ascii(&img), @r"
        .........
        ..#####..
        .#######.
        .#######.
        .#######.
        .#######.
        .#######.
        ..#####..
        .........
        ");
    }

    #[test]
    fn test_fill_circle_radius_one_is_a_point() {
        let mut img = Image::new(3, 3);
        img.fill_circle(1, 1, 1, 2);
        assert_eq!(img.pixels(), &[0, 0, 0, 0, 2, 0, 0, 0, 0]);
    }

    #[test]
    fn test_draw_circle_radius_one_is_a_point() {
        let mut img = Image::new(3, 3);
        img.draw_circle(1, 1, 1, 0, 2);
        assert_eq!(img.pixels(), &[0, 0, 0, 0, 2, 0, 0, 0, 0]);
    }

    #[test]
    fn test_zero_radius_draws_nothing() {
        let mut img = Image::new(3, 3);
        img.draw_circle(1, 1, 0, 0, 2);
        img.fill_circle(1, 1, 0, 2);
        img.fill_circle(1, 1, -4, 2);
        assert!(img.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_outline_is_symmetric_and_near_radius() {
        let (cx, cy, r) = (10, 10, 8);
        let mut img = Image::new(21, 21);
        img.draw_circle(cx, cy, r, 0, 1);

        let mut count = 0;
        for y in 0..21 {
            for x in 0..21 {
                if img.get(x, y) == Some(1) {
                    count += 1;
                    let d = (((x - cx).pow(2) + (y - cy).pow(2)) as f32).sqrt();
                    assert!((d - (r as f32 - 1.0)).abs() <= 1.0, "({x}, {y}) at {d}");
                    assert_eq!(img.get(2 * cx - x, y), Some(1));
                    assert_eq!(img.get(x, 2 * cy - y), Some(1));
                    assert_eq!(img.get(cx + (y - cy), cy + (x - cx)), Some(1));
                }
            }
        }
        assert!(count > 0);
        assert_eq!(img.get(cx + r - 1, cy), Some(1));
        assert_eq!(img.get(cx, cy), Some(0));
    }

    #[test]
    fn test_outline_inside_fill() {
        let mut outline = Image::new(21, 21);
        let mut filled = Image::new(21, 21);
        outline.draw_circle(10, 10, 7, 0, 1);
        filled.fill_circle(10, 10, 7, 1);

        for (o, f) in outline.pixels().iter().zip(filled.pixels()) {
            if *o != 0 {
                assert_ne!(*f, 0);
            }
        }
    }

    #[test]
    fn test_dashed_circle_draws_fewer_points() {
        let mut solid = Image::new(21, 21);
        let mut dashed = Image::new(21, 21);
        solid.draw_circle(10, 10, 8, 0, 1);
        dashed.draw_circle(10, 10, 8, 4, 1);

        let lit = |img: &Image<'_>| img.pixels().iter().filter(|&&p| p != 0).count();
        assert!(lit(&dashed) > 0);
        assert!(lit(&dashed) < lit(&solid));
    }

    #[test]
    fn test_dashed_circle_stays_symmetric() {
        let (cx, cy) = (10, 10);
        for period in [1, 2, 3, 5] {
            let mut img = Image::new(21, 21);
            img.draw_circle(cx, cy, 8, period, 1);

            for y in 0..21 {
                for x in 0..21 {
                    if img.get(x, y) == Some(1) {
                        assert_eq!(img.get(2 * cx - x, y), Some(1), "period {period} ({x}, {y})");
                        assert_eq!(img.get(x, 2 * cy - y), Some(1), "period {period} ({x}, {y})");
                        assert_eq!(
                            img.get(cx + (y - cy), cy + (x - cx)),
                            Some(1),
                            "period {period} ({x}, {y})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_dashed_circle_skips_first_run() {
        // The first group sits on the axes at distance r - 1.
        let mut img = Image::new(21, 21);
        img.draw_circle(10, 10, 8, 2, 1);
        assert_eq!(img.get(17, 10), Some(0));
        assert_eq!(img.get(10, 3), Some(0));
    }

    #[test]
    fn test_fill_circle_clips() {
        let mut img = Image::new(4, 4);
        img.fill_circle(0, 0, 3, 1);
        assert_eq!(img.get(0, 0), Some(1));
        assert_eq!(img.get(2, 0), Some(1));
        // 2² + 2² < 3²
        assert_eq!(img.get(2, 2), Some(1));
        assert_eq!(img.get(2, 3), Some(0));
        assert_eq!(img.get(3, 3), Some(0));
    }
}
