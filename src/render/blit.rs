//! Copying between images: scaled blits and affine blits.

use crate::image::{CopyInfo, Image};
use crate::types::{Mat2, Rect};

impl Image<'_> {
    /// Copy `src_rect` of `src` into `dest` on this image, scaling with
    /// nearest-neighbour sampling.
    ///
    /// `None` for either rectangle means the whole image. Samples outside
    /// `src` are skipped, and every hit goes through [`Image::draw_point`],
    /// so transparent source pixels are skipped when this image skips them.
    pub fn blit(&mut self, dest: Option<Rect>, src: &Image<'_>, src_rect: Option<Rect>) {
        let dest = dest.unwrap_or_else(|| self.bounds());
        let src_rect = src_rect.unwrap_or_else(|| src.bounds());
        if dest.is_empty() || src_rect.is_empty() {
            return;
        }

        let scale_x = src_rect.w as f32 / dest.w as f32;
        let scale_y = src_rect.h as f32 / dest.h as f32;
        let (w, h) = self.extent();

        for y in dest.y.saturating_neg().max(0)..dest.h {
            let dy = dest.y + y;
            if dy >= h {
                break;
            }
            let sy = src_rect.y.saturating_add((scale_y * y as f32) as i32);

            for x in dest.x.saturating_neg().max(0)..dest.w {
                let dx = dest.x + x;
                if dx >= w {
                    break;
                }
                let sx = src_rect.x.saturating_add((scale_x * x as f32) as i32);

                if let Some(value) = src.get(sx, sy) {
                    self.draw_point(dx, dy, value);
                }
            }
        }
    }

    /// Copy `src_rect` of `src` into `dest`, transformed by `mat` around
    /// `(dest.x + cx, dest.y + cy)`.
    ///
    /// The transformed destination footprint is filled with a temporary
    /// [`CopyInfo`] shader that samples the source through the inverse
    /// transform. The image's own shader is not consulted. A singular
    /// matrix copies nothing.
    pub fn transform_blit(
        &mut self,
        dest: Option<Rect>,
        src: &Image<'_>,
        src_rect: Option<Rect>,
        mat: &Mat2,
        cx: i32,
        cy: i32,
    ) {
        let Some(inverse) = mat.invert() else {
            log::debug!("skipping blit through singular matrix {:?}", mat.m);
            return;
        };

        let dest = dest.unwrap_or_else(|| self.bounds());
        let info = CopyInfo {
            src,
            src_rect: src_rect.unwrap_or_else(|| src.bounds()),
            dest_rect: dest,
            cx,
            cy,
            inverse: Some(inverse),
        };

        // Any non-transparent colour works: the shader ignores it.
        self.with_shader(&info, |stage| stage.fill_transform_rect(dest, 1, mat, cx, cy));
    }

    /// [`Image::transform_blit`] with a rotation by `angle` radians.
    pub fn rotate_blit(
        &mut self,
        dest: Option<Rect>,
        src: &Image<'_>,
        src_rect: Option<Rect>,
        angle: f32,
        cx: i32,
        cy: i32,
    ) {
        self.transform_blit(dest, src, src_rect, &Mat2::rotation(angle), cx, cy);
    }
}
