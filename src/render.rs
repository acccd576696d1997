//! Band-parallel rendering of the whole image.
//!
//! Rows are split into one contiguous band per worker. Each worker gets a
//! mutable slice over its own rows only, so the buffer needs no locking;
//! the pool's scope returning is the barrier after which the image is whole.

use crate::marcher::render_pixel;
use crate::noise::{NoiseField, DEFAULT_SEED};
use crate::scene::Scene;
use crate::RenderError;
use image::{Pixel, RgbaImage};
use std::ops::Range;
use std::time::Instant;

const CHANNELS: usize = 4;

#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub workers: usize,
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 500,
            height: 500,
            workers: 2,
            seed: DEFAULT_SEED,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width < 2 || self.height < 2 {
            return Err(RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.workers == 0 {
            return Err(RenderError::NoWorkers);
        }
        Ok(())
    }
}

/// Row range owned by each of `workers` bands: band `i` gets
/// `[i*height/workers, (i+1)*height/workers)`.
pub fn bands(height: u32, workers: usize) -> Vec<Range<u32>> {
    let h = height as u64;
    let n = workers as u64;
    (0..n)
        .map(|i| (i * h / n) as u32..((i + 1) * h / n) as u32)
        .collect()
}

/// Render with a noise field built from `config.seed`.
pub fn render(config: &RenderConfig) -> Result<RgbaImage, RenderError> {
    let noise = NoiseField::new(config.seed);
    render_with(config, &noise)
}

pub fn render_with(config: &RenderConfig, noise: &NoiseField) -> Result<RgbaImage, RenderError> {
    config.validate()?;
    let (w, h) = (config.width, config.height);
    log::info!(
        "rendering {}x{} with {} workers, seed {:#x}",
        w,
        h,
        config.workers,
        config.seed
    );
    let start = Instant::now();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()?;
    let scene = Scene::new(noise);
    let mut img = RgbaImage::new(w, h);
    let row_len = w as usize * CHANNELS;

    pool.scope(|s| {
        let mut rest: &mut [u8] = &mut img;
        for (index, rows) in bands(h, config.workers).into_iter().enumerate() {
            let (band, tail) =
                std::mem::take(&mut rest).split_at_mut((rows.end - rows.start) as usize * row_len);
            rest = tail;
            let scene = &scene;
            s.spawn(move |_| {
                render_band(scene, band, rows.clone(), w, h);
                log::debug!("band {} finished rows {:?}", index, rows);
            });
        }
    });

    log::info!("render took {} s", start.elapsed().as_secs_f32());
    Ok(img)
}

fn render_band(scene: &Scene, band: &mut [u8], rows: Range<u32>, w: u32, h: u32) {
    let row_len = w as usize * CHANNELS;
    for (y, row) in rows.zip(band.chunks_exact_mut(row_len)) {
        for (x, px) in (0..w).zip(row.chunks_exact_mut(CHANNELS)) {
            px.copy_from_slice(render_pixel(scene, x, y, w, h).channels());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_cover_every_row_once() {
        for (h, n) in [(500, 2), (500, 3), (7, 4), (3, 5)] {
            let b = bands(h, n);
            assert_eq!(b.len(), n);
            assert_eq!(b[0].start, 0);
            assert_eq!(b[n - 1].end, h);
            for pair in b.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
        }
    }

    #[test]
    fn test_bands_default_split() {
        assert_eq!(bands(500, 2), vec![0..250, 250..500]);
    }

    #[test]
    fn test_rejects_degenerate_config() {
        let one_row = RenderConfig {
            height: 1,
            ..RenderConfig::default()
        };
        assert!(matches!(
            render(&one_row),
            Err(RenderError::InvalidDimensions { width: 500, height: 1 })
        ));
        let idle = RenderConfig {
            workers: 0,
            ..RenderConfig::default()
        };
        assert!(matches!(render(&idle), Err(RenderError::NoWorkers)));
    }

    #[test]
    fn test_more_workers_than_rows() {
        let config = RenderConfig {
            width: 4,
            height: 3,
            workers: 5,
            seed: 1,
        };
        let img = render(&config).unwrap();
        assert_eq!(img.dimensions(), (4, 3));
        assert!(img.pixels().all(|p| p.0[3] == 255));
    }
}
