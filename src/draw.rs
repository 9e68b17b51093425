//! Overlay drawing for detected candidates and matched pairs.

use crate::geometry::RotatedRect;
use crate::pairing::ParallelPair;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

/// Outline color for every detected candidate.
pub const CANDIDATE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
/// Outline color for the first member of a matched pair.
pub const PAIR_FIRST_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
/// Outline color for the second member of a matched pair.
pub const PAIR_SECOND_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Draws the outline of `rect`. Lines thicker than one pixel are drawn as
/// parallel strokes offset along each edge normal.
pub fn draw_rotated_rect(canvas: &mut RgbImage, rect: &RotatedRect, color: Rgb<u8>, thickness: u32) {
    let corners = rect.corners();
    let thickness = thickness.max(1) as i32;
    let first_offset = -(thickness - 1) / 2;

    for i in 0..4 {
        let a = corners[i];
        let b = corners[(i + 1) % 4];
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let len = dx.hypot(dy);
        let (nx, ny) = if len > 0.0 { (-dy / len, dx / len) } else { (0.0, 0.0) };

        for step in first_offset..first_offset + thickness {
            let off = step as f32;
            draw_line_segment_mut(
                canvas,
                (a.x + nx * off, a.y + ny * off),
                (b.x + nx * off, b.y + ny * off),
                color,
            );
        }
    }
}

/// Outlines every rectangle in `rects`.
pub fn draw_rotated_rects(canvas: &mut RgbImage, rects: &[RotatedRect], color: Rgb<u8>, thickness: u32) {
    for rect in rects {
        draw_rotated_rect(canvas, rect, color, thickness);
    }
}

/// Highlights matched pairs with thick outlines. Pairs that reference
/// indices outside `rects` are skipped.
pub fn draw_parallel_pairs(canvas: &mut RgbImage, rects: &[RotatedRect], pairs: &[ParallelPair]) {
    for pair in pairs {
        let (Some(first), Some(second)) = (rects.get(pair.first), rects.get(pair.second)) else {
            continue;
        };
        draw_rotated_rect(canvas, first, PAIR_FIRST_COLOR, 5);
        draw_rotated_rect(canvas, second, PAIR_SECOND_COLOR, 5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_touches_edges_but_not_center() {
        let mut canvas = RgbImage::new(40, 40);
        let rect = RotatedRect::new(20.0, 20.0, 20.0, 10.0, 0.0);
        draw_rotated_rect(&mut canvas, &rect, CANDIDATE_COLOR, 1);
        assert_eq!(*canvas.get_pixel(20, 15), CANDIDATE_COLOR);
        assert_eq!(*canvas.get_pixel(10, 20), CANDIDATE_COLOR);
        assert_eq!(*canvas.get_pixel(20, 20), Rgb([0, 0, 0]));
    }

    #[test]
    fn out_of_range_pairs_are_ignored() {
        let mut canvas = RgbImage::new(16, 16);
        let rects = [RotatedRect::new(8.0, 8.0, 4.0, 10.0, 0.0)];
        let pairs = [ParallelPair { first: 0, second: 3 }];
        draw_parallel_pairs(&mut canvas, &rects, &pairs);
        assert!(canvas.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }
}
