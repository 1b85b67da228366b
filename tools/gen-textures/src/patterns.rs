//! SOLAR SORTIE hull and UI texture painters
//!
//! All five textures are 64x64 tiles. Grain seeds are fixed so reruns are
//! byte-stable.

use crate::texture::{Lcg, TextureBuffer};

/// Tile edge length for every pattern
pub const TILE_SIZE: u32 = 64;

/// Hull plating: grey base with panel seams, rivets, and heavy grain
pub fn metal_panel() -> TextureBuffer {
    let size = TILE_SIZE;
    let mut tex = TextureBuffer::filled(size, size, [180, 180, 180, 255]);

    // Panel seams: dark outer edges, lighter mid-panel joins
    tex.fill_rect(0, 0, size, 2, [100, 100, 100, 255]);
    tex.fill_rect(0, 0, 2, size, [100, 100, 100, 255]);
    tex.fill_rect(size / 2, 0, 1, size, [140, 140, 140, 255]);
    tex.fill_rect(0, size / 2, size, 1, [140, 140, 140, 255]);

    // Rivets at the panel corners and mid-seam joins
    let spots = [4, size - 4, size / 2 - 4, size / 2 + 4];
    for &x in &spots {
        for &y in &spots {
            tex.set_pixel(x, y, [50, 50, 50, 255]);
        }
    }

    tex.grain(20, 0xA11_0201);
    tex
}

/// Cargo bay flooring: 8px checkerboard with light grain
pub fn checker_plate() -> TextureBuffer {
    let size = TILE_SIZE;
    let check = 8;
    let mut tex = TextureBuffer::new(size, size);

    for y in 0..size {
        for x in 0..size {
            let light = ((x / check) + (y / check)) % 2 == 0;
            let color = if light {
                [200, 200, 200, 255]
            } else {
                [50, 50, 50, 255]
            };
            tex.set_pixel(x, y, color);
        }
    }

    tex.grain(10, 0xA11_0202);
    tex
}

/// Tactical display backdrop: dark field, 16px grid, bright border
pub fn hull_grid() -> TextureBuffer {
    let size = TILE_SIZE;
    let mut tex = TextureBuffer::filled(size, size, [20, 20, 20, 255]);

    let step = 16;
    for i in (0..size).step_by(step as usize) {
        tex.fill_rect(i, 0, 1, size, [100, 100, 100, 255]);
        tex.fill_rect(0, i, size, 1, [100, 100, 100, 255]);
    }

    // 2px border frame
    tex.fill_rect(0, 0, size, 2, [150, 150, 150, 255]);
    tex.fill_rect(0, size - 2, size, 2, [150, 150, 150, 255]);
    tex.fill_rect(0, 0, 2, size, [150, 150, 150, 255]);
    tex.fill_rect(size - 2, 0, 2, size, [150, 150, 150, 255]);

    tex
}

/// Signal static: bright greyscale noise in the 100-255 band
pub fn static_noise() -> TextureBuffer {
    let size = TILE_SIZE;
    let mut tex = TextureBuffer::new(size, size);
    let mut rng = Lcg::new(0xA11_0204);

    for y in 0..size {
        for x in 0..size {
            let v = rng.range(100, 255) as u8;
            tex.set_pixel(x, y, [v, v, v, 255]);
        }
    }

    tex
}

/// Thruster exhaust sprite: white core falling off radially to transparent
pub fn thruster_glow() -> TextureBuffer {
    let size = TILE_SIZE;
    let mut tex = TextureBuffer::new(size, size);
    let center = size as f32 / 2.0;
    let max_dist = size as f32 / 2.0;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < max_dist {
                let alpha = (255.0 * (1.0 - dist / max_dist)) as u8;
                tex.set_pixel(x, y, [255, 255, 255, alpha]);
            }
        }
    }

    tex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_are_tile_sized() {
        for tex in [
            metal_panel(),
            checker_plate(),
            hull_grid(),
            static_noise(),
            thruster_glow(),
        ] {
            assert_eq!(tex.width, TILE_SIZE);
            assert_eq!(tex.height, TILE_SIZE);
        }
    }

    #[test]
    fn test_checker_alternates() {
        // Grain is ±10, so the light/dark tiles stay well separated
        let tex = checker_plate();
        assert!(tex.get_pixel(3, 3)[0] >= 190);
        assert!(tex.get_pixel(12, 3)[0] <= 60);
        assert!(tex.get_pixel(12, 12)[0] >= 190);
    }

    #[test]
    fn test_grid_border_and_field() {
        let tex = hull_grid();
        assert_eq!(tex.get_pixel(0, 30), [150, 150, 150, 255]);
        assert_eq!(tex.get_pixel(63, 30), [150, 150, 150, 255]);
        // Off the grid lines the field stays dark
        assert_eq!(tex.get_pixel(5, 5), [20, 20, 20, 255]);
    }

    #[test]
    fn test_static_noise_band() {
        let tex = static_noise();
        for y in 0..TILE_SIZE {
            for x in 0..TILE_SIZE {
                let [r, g, b, a] = tex.get_pixel(x, y);
                assert!(r >= 100);
                assert_eq!(r, g);
                assert_eq!(g, b);
                assert_eq!(a, 255);
            }
        }
    }

    #[test]
    fn test_thruster_falloff() {
        let tex = thruster_glow();
        // Near-opaque at the core, fully transparent at the corners
        assert!(tex.get_pixel(32, 32)[3] > 240);
        assert_eq!(tex.get_pixel(0, 0)[3], 0);
        assert_eq!(tex.get_pixel(63, 63)[3], 0);
    }

    #[test]
    fn test_patterns_deterministic() {
        assert_eq!(metal_panel().pixels, metal_panel().pixels);
        assert_eq!(static_noise().pixels, static_noise().pixels);
    }
}
