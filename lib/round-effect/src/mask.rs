use image::{imageops, GrayImage, Luma};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;

const OPAQUE: Luma<u8> = Luma([255]);

/// Square opacity tile of side `2 * radius`: transparent background with a
/// filled opaque circle inscribed in it, inset one pixel from the far edge.
pub fn circle_tile(radius: u32) -> GrayImage {
    let mut tile = GrayImage::new(radius * 2, radius * 2);

    if radius > 0 {
        let center = radius as i32 - 1;
        draw_filled_circle_mut(&mut tile, (center, center), center, OPAQUE);
    }

    tile
}

/// Full-size alpha mask for a `width x height` image: opaque everywhere
/// except the four `radius x radius` corner squares, which hold the matching
/// quadrants of the circle tile.
///
/// An oversized radius (> half the smaller dimension) is not clamped; the
/// quadrant pastes overlap and clip as the raster primitives define.
pub fn rounded_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    let mut mask = GrayImage::from_pixel(width, height, OPAQUE);
    if radius == 0 {
        return mask;
    }

    let tile = circle_tile(radius);
    let right = width.saturating_sub(radius) as i64;
    let bottom = height.saturating_sub(radius) as i64;

    // Quadrant pastes: (tile crop origin) -> (mask corner)
    let corners = [
        (0, 0, 0, 0),
        (0, radius, 0, bottom),
        (radius, 0, right, 0),
        (radius, radius, right, bottom),
    ];
    for (tile_x, tile_y, mask_x, mask_y) in corners {
        let quadrant = imageops::crop_imm(&tile, tile_x, tile_y, radius, radius).to_image();
        imageops::replace(&mut mask, &quadrant, mask_x, mask_y);
    }

    // Re-affirm the central bands so edges and center stay fully opaque
    if width > radius * 2 {
        let band = Rect::at(radius as i32, 0).of_size(width - radius * 2, height);
        draw_filled_rect_mut(&mut mask, band, OPAQUE);
    }
    if height > radius * 2 {
        let band = Rect::at(0, radius as i32).of_size(width, height - radius * 2);
        draw_filled_rect_mut(&mut mask, band, OPAQUE);
    }

    mask
}
