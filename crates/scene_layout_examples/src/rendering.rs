//! Top-down PNG rendering of layout results for the example binaries.
use std::collections::HashMap;
use std::path::Path;

use glam::Vec2;
use image::{Rgb, RgbImage};
use scene_layout::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// How a kind is drawn on the map. Sizes are world units per unit of placement scale.
#[derive(Debug, Clone)]
pub enum KindStyle {
    Circle { color: [u8; 3], radius: f32 },
    Square { color: [u8; 3], half_extent: f32 },
}

impl KindStyle {
    fn default_for(kind: Kind) -> Self {
        match kind {
            Kind::Tree => KindStyle::Circle {
                color: [0x22, 0x8b, 0x22],
                radius: 1.5,
            },
            Kind::Mountain => KindStyle::Circle {
                color: [0x80, 0x80, 0x80],
                radius: 1.0,
            },
            Kind::House => KindStyle::Square {
                color: [0xcd, 0x85, 0x3f],
                half_extent: 2.0,
            },
        }
    }
}

/// Map projection and styling for [`render_layout_to_png`].
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub world_extent: Vec2,
    pub world_center: Vec2,
    pub background: [u8; 3],
    pub river: Option<RiverSettings>,
    pub styles: HashMap<Kind, KindStyle>,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), world_extent: Vec2) -> Self {
        Self {
            image_size,
            world_extent,
            world_center: Vec2::ZERO,
            background: [255, 255, 255],
            river: None,
            styles: Kind::ALL
                .iter()
                .map(|&k| (k, KindStyle::default_for(k)))
                .collect(),
        }
    }

    /// Map covering the ground plane of `settings`, with its ground color and river.
    pub fn from_scene(image_size: (u32, u32), settings: &SceneSettings) -> Self {
        Self::new(image_size, Vec2::splat(settings.ground.size))
            .with_background(settings.ground.color)
            .with_river(settings.river.clone())
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_river(mut self, river: RiverSettings) -> Self {
        self.river = Some(river);
        self
    }

    pub fn set_kind_style(&mut self, kind: Kind, style: KindStyle) {
        self.styles.insert(kind, style);
    }

    /// Pixels per world unit along each axis.
    fn pixels_per_unit(&self) -> Vec2 {
        Vec2::new(
            self.image_size.0 as f32 / self.world_extent.x,
            self.image_size.1 as f32 / self.world_extent.y,
        )
    }

    /// World `(x, z)` to pixel coordinates; +z points down the image.
    fn world_to_pixel(&self, x: f32, z: f32) -> Vec2 {
        let min = self.world_center - self.world_extent * 0.5;
        (Vec2::new(x, z) - min) * self.pixels_per_unit()
    }
}

/// Rasterises `result` over the configured ground and writes a PNG to `out_path`.
pub fn render_layout_to_png(
    result: &LayoutResult,
    rc: &RenderConfig,
    out_path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    if rc.world_extent.x <= 0.0 || rc.world_extent.y <= 0.0 {
        anyhow::bail!("world extent must be > 0 in both components");
    }

    let (w, h) = rc.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(rc.background));

    if let Some(river) = &rc.river {
        let top = rc.world_to_pixel(0.0, river.center_z - river.width * 0.5).y;
        let bottom = rc.world_to_pixel(0.0, river.center_z + river.width * 0.5).y;
        fill_rect(&mut img, 0.0, top, w as f32, bottom, river.color);
    }

    let ppu = rc.pixels_per_unit();
    for p in &result.placements {
        let Some(style) = rc.styles.get(&p.kind) else {
            continue;
        };
        let center = rc.world_to_pixel(p.x, p.z);
        match style {
            KindStyle::Circle { color, radius } => {
                let r = (radius * p.scale * ppu.x.min(ppu.y)).max(1.0);
                fill_circle(&mut img, center, r, *color);
            }
            KindStyle::Square { color, half_extent } => {
                let half = (half_extent * p.scale * ppu.x.min(ppu.y)).max(1.0);
                fill_rect(
                    &mut img,
                    center.x - half,
                    center.y - half,
                    center.x + half,
                    center.y + half,
                    *color,
                );
            }
        }
    }

    let path = out_path.as_ref();
    img.save(path)?;
    info!("Wrote {} placement(s) to {}.", result.len(), path.display());
    Ok(())
}

fn fill_rect(img: &mut RgbImage, x0: f32, y0: f32, x1: f32, y1: f32, color: [u8; 3]) {
    let (w, h) = img.dimensions();
    let xa = x0.floor().clamp(0.0, w as f32) as u32;
    let xb = x1.ceil().clamp(0.0, w as f32) as u32;
    let ya = y0.floor().clamp(0.0, h as f32) as u32;
    let yb = y1.ceil().clamp(0.0, h as f32) as u32;
    for y in ya..yb {
        for x in xa..xb {
            img.put_pixel(x, y, Rgb(color));
        }
    }
}

fn fill_circle(img: &mut RgbImage, center: Vec2, radius: f32, color: [u8; 3]) {
    let (w, h) = img.dimensions();
    let xa = (center.x - radius).floor().clamp(0.0, w as f32) as u32;
    let xb = (center.x + radius).ceil().clamp(0.0, w as f32) as u32;
    let ya = (center.y - radius).floor().clamp(0.0, h as f32) as u32;
    let yb = (center.y + radius).ceil().clamp(0.0, h as f32) as u32;
    let r2 = radius * radius;
    for y in ya..yb {
        for x in xa..xb {
            let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
            if d.length_squared() <= r2 {
                img.put_pixel(x, y, Rgb(color));
            }
        }
    }
}
