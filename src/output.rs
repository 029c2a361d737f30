//! Reporting the grid: plain text, CSV files, and heat map images.

use crate::domain::*;
use std::io::prelude::*;
use std::path::Path;

/// One line per row, values separated by `", "`.
pub fn write_grid<W: Write>(grid: &Grid<2>, output: &mut W) -> std::io::Result<()> {
    for r in 0..grid.rows() {
        let mut values = grid.row(r).iter();
        if let Some(first) = values.next() {
            write!(output, "{first:.4}")?;
        }
        for v in values {
            write!(output, ", {v:.4}")?;
        }
        writeln!(output)?;
    }
    Ok(())
}

pub fn write_csv<P: AsRef<Path>>(grid: &Grid<2>, path: &P) -> std::io::Result<()> {
    log::info!("writing {:?}", path.as_ref());
    let mut output = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_grid(grid, &mut output)?;
    output.flush()
}

/// Map values into `[0, 1]` against the grid's own min and max.
/// A flat grid maps to 0.
pub fn normalize(grid: &Grid<2>) -> impl Fn(f64) -> f64 {
    let (min, max) = grid
        .buffer()
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });
    let range = max - min;
    move |v| {
        if range > 0.0 {
            (v - min) / range
        } else {
            0.0
        }
    }
}

/// Heat map with one pixel per cell, rows running down the image.
pub fn heat_image(grid: &Grid<2>) -> image::RgbImage {
    let gradient = colorous::TURBO;
    let scale = normalize(grid);
    let mut img = image::RgbImage::new(grid.cols() as u32, grid.rows() as u32);
    for (coord, r) in grid.coord_iter() {
        let c = gradient.eval_continuous(scale(r));
        img.put_pixel(coord[1] as u32, coord[0] as u32, image::Rgb(c.as_array()));
    }
    img
}

pub fn write_image<P: AsRef<Path>>(
    grid: &Grid<2>,
    path: &P,
) -> image::ImageResult<()> {
    log::info!("writing {:?}", path.as_ref());
    heat_image(grid).save(path)
}
