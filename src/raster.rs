//! Draws an intensity grid into an RGB frame, the way the window would.

use image::{Rgb, RgbImage};

use crate::error::ExplorerError;
use crate::grid::{CellRect, IntensityGrid};
use crate::params::RenderConfig;

/// Clear a frame and fill each cell rectangle with its grayscale value
pub fn rasterize(grid: &IntensityGrid, config: &RenderConfig) -> RgbImage {
    let mut img = RgbImage::from_pixel(
        config.window_width,
        config.window_height,
        Rgb(config.background),
    );

    for cell in grid.iter() {
        let v = cell.intensity;
        fill_rect(&mut img, &cell.rect, Rgb([v, v, v]));
    }

    img
}

/// Rasterize the grid and write it to `config.output_path` as PNG
pub fn save_frame(grid: &IntensityGrid, config: &RenderConfig) -> Result<(), ExplorerError> {
    rasterize(grid, config).save(&config.output_path)?;
    Ok(())
}

/// Fill the part of `rect` that lies inside the image
fn fill_rect(img: &mut RgbImage, rect: &CellRect, color: Rgb<u8>) {
    let (w, h) = (i64::from(img.width()), i64::from(img.height()));

    let x0 = i64::from(rect.x).clamp(0, w);
    let y0 = i64::from(rect.y).clamp(0, h);
    let x1 = (i64::from(rect.x) + i64::from(rect.width)).clamp(0, w);
    let y1 = (i64::from(rect.y) + i64::from(rect.height)).clamp(0, h);

    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    fn cell(x: i32, y: i32, size: u32, intensity: u8) -> Cell {
        Cell {
            rect: CellRect {
                x,
                y,
                width: size,
                height: size,
            },
            intensity,
        }
    }

    #[test]
    fn test_background_and_tiles() {
        let config = RenderConfig {
            window_width: 20,
            window_height: 10,
            ..RenderConfig::default()
        };
        let grid = IntensityGrid {
            size: 2,
            cells: vec![cell(2, 1, 3, 10), cell(5, 1, 3, 200)],
        };

        let img = rasterize(&grid, &config);
        assert_eq!(img.dimensions(), (20, 10));
        assert_eq!(*img.get_pixel(0, 0), Rgb([24, 25, 38]));
        assert_eq!(*img.get_pixel(2, 1), Rgb([10, 10, 10]));
        assert_eq!(*img.get_pixel(4, 3), Rgb([10, 10, 10]));
        assert_eq!(*img.get_pixel(5, 1), Rgb([200, 200, 200]));
        assert_eq!(*img.get_pixel(7, 3), Rgb([200, 200, 200]));
        assert_eq!(*img.get_pixel(8, 1), Rgb([24, 25, 38]));
        assert_eq!(*img.get_pixel(2, 4), Rgb([24, 25, 38]));
    }

    #[test]
    fn test_cells_outside_frame_are_clipped() {
        let config = RenderConfig {
            window_width: 8,
            window_height: 8,
            ..RenderConfig::default()
        };
        let grid = IntensityGrid {
            size: 2,
            cells: vec![cell(-2, -2, 4, 99), cell(6, 6, 64, 7)],
        };

        let img = rasterize(&grid, &config);
        assert_eq!(*img.get_pixel(0, 0), Rgb([99, 99, 99]));
        assert_eq!(*img.get_pixel(2, 2), Rgb([24, 25, 38]));
        assert_eq!(*img.get_pixel(7, 7), Rgb([7, 7, 7]));
    }

    #[test]
    fn test_save_frame_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let config = RenderConfig {
            window_width: 16,
            window_height: 16,
            output_path: path.to_string_lossy().into_owned(),
            ..RenderConfig::default()
        };
        let grid = IntensityGrid {
            size: 1,
            cells: vec![cell(4, 4, 8, 128)],
        };

        save_frame(&grid, &config).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (16, 16));
        assert_eq!(*loaded.get_pixel(5, 5), Rgb([128, 128, 128]));
    }
}
