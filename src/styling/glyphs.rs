// SPDX-License-Identifier: MPL-2.0
//! Glyph rendering for the gallery buttons.
//!
//! Glyphs are shipped as white SVG templates, rasterized at their native size,
//! tinted, and then resized to exactly [`sizing::GLYPH`] pixels per side. The
//! resize always runs so the on-screen raster is 20×20 no matter what size the
//! source asset is authored at.
//!
//! Handles for the four tint variants used by the gallery are rasterized once
//! and cached for the process lifetime. A glyph that fails to rasterize
//! degrades to a fully transparent raster of the same size; there is no
//! user-visible error path for missing artwork.

use crate::error::{Error, Result};
use crate::ui::design_tokens::{opacity, palette, sizing};
use iced::widget::image::Handle;
use iced::Color;
use image_rs::{imageops::FilterType, DynamicImage, RgbaImage};
use resvg::usvg;
use std::sync::OnceLock;

/// Source artwork for a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Check,
    Play,
}

impl Glyph {
    fn source(self) -> &'static [u8] {
        match self {
            Glyph::Check => include_bytes!("../../assets/icons/check_circle.svg"),
            Glyph::Play => include_bytes!("../../assets/icons/play_circle.svg"),
        }
    }
}

/// A glyph together with its tint color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TintedGlyph {
    pub glyph: Glyph,
    pub tint: Color,
}

/// Unselected check glyph (light gray).
pub const CHECK_NORMAL: TintedGlyph = TintedGlyph {
    glyph: Glyph::Check,
    tint: palette::GRAY_300,
};

/// Selected check glyph (softened green).
pub const CHECK_SELECTED: TintedGlyph = TintedGlyph {
    glyph: Glyph::Check,
    tint: Color {
        a: opacity::TINT_SOFT,
        ..palette::SUCCESS_500
    },
};

/// Check glyph while the pointer is held down (medium gray).
pub const CHECK_HIGHLIGHTED: TintedGlyph = TintedGlyph {
    glyph: Glyph::Check,
    tint: palette::GRAY_500,
};

/// Play glyph (softened blue).
pub const PLAY: TintedGlyph = TintedGlyph {
    glyph: Glyph::Play,
    tint: Color {
        a: opacity::TINT_SOFT,
        ..palette::PRIMARY_500
    },
};

/// Render size of every glyph raster, in pixels per side.
pub const GLYPH_SIZE_PX: u32 = 20;

const _: () = {
    assert!(GLYPH_SIZE_PX > 0);
    // The token and the raster size must agree.
    assert!(sizing::GLYPH == GLYPH_SIZE_PX as f32);
};

/// Rasterize the SVG template at its native size and return the coverage
/// (alpha) mask together with the raster dimensions.
fn rasterize_mask(svg: &[u8]) -> Result<(Vec<u8>, u32, u32)> {
    let tree = usvg::Tree::from_data(svg, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("glyph raster has zero size".to_string()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let mask = pixmap.pixels().iter().map(|px| px.alpha()).collect();
    Ok((mask, width, height))
}

/// Tint a glyph template. The template's own color is discarded; its coverage
/// becomes the alpha channel, scaled by the tint's alpha.
pub fn render_tinted(glyph: TintedGlyph) -> Result<RgbaImage> {
    let (mask, width, height) = rasterize_mask(glyph.glyph.source())?;

    let tint = glyph.tint;
    let r = (tint.r * 255.0).round() as u8;
    let g = (tint.g * 255.0).round() as u8;
    let b = (tint.b * 255.0).round() as u8;

    let mut pixels = Vec::with_capacity(mask.len() * 4);
    for coverage in mask {
        let a = (f32::from(coverage) * tint.a).round() as u8;
        pixels.extend_from_slice(&[r, g, b, a]);
    }

    RgbaImage::from_raw(width, height, pixels)
        .ok_or_else(|| Error::Svg("glyph raster size mismatch".to_string()))
}

/// Resize a glyph raster to the fixed render size using a high-quality filter.
/// Output dimensions are always exactly [`GLYPH_SIZE_PX`] on both axes.
#[must_use]
pub fn resize_to_glyph(image: RgbaImage) -> RgbaImage {
    DynamicImage::ImageRgba8(image)
        .resize_exact(GLYPH_SIZE_PX, GLYPH_SIZE_PX, FilterType::Lanczos3)
        .to_rgba8()
}

/// Full pipeline: rasterize, tint, resize.
pub fn raster(glyph: TintedGlyph) -> Result<RgbaImage> {
    Ok(resize_to_glyph(render_tinted(glyph)?))
}

fn build_handle(glyph: TintedGlyph) -> Handle {
    match raster(glyph) {
        Ok(image) => Handle::from_rgba(GLYPH_SIZE_PX, GLYPH_SIZE_PX, image.into_raw()),
        // Degrade to an invisible raster of the right size.
        Err(_) => Handle::from_rgba(
            GLYPH_SIZE_PX,
            GLYPH_SIZE_PX,
            vec![0u8; (GLYPH_SIZE_PX * GLYPH_SIZE_PX * 4) as usize],
        ),
    }
}

macro_rules! cached_handle {
    ($variant:expr) => {{
        static HANDLE: OnceLock<Handle> = OnceLock::new();
        HANDLE.get_or_init(|| build_handle($variant)).clone()
    }};
}

/// Image handle for a tinted glyph. The four gallery variants are cached;
/// any other tint is rasterized on demand.
#[must_use]
pub fn handle_for(glyph: TintedGlyph) -> Handle {
    if glyph == CHECK_NORMAL {
        cached_handle!(CHECK_NORMAL)
    } else if glyph == CHECK_SELECTED {
        cached_handle!(CHECK_SELECTED)
    } else if glyph == CHECK_HIGHLIGHTED {
        cached_handle!(CHECK_HIGHLIGHTED)
    } else if glyph == PLAY {
        cached_handle!(PLAY)
    } else {
        build_handle(glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raster_is_exactly_glyph_sized() {
        for variant in [CHECK_NORMAL, CHECK_SELECTED, CHECK_HIGHLIGHTED, PLAY] {
            let image = raster(variant).expect("embedded glyph should rasterize");
            assert_eq!(image.width(), GLYPH_SIZE_PX);
            assert_eq!(image.height(), GLYPH_SIZE_PX);
        }
    }

    #[test]
    fn native_raster_is_larger_than_render_size() {
        // The resize must actually do work: the templates are authored larger
        // than the render size.
        let native = render_tinted(CHECK_NORMAL).unwrap();
        assert!(native.width() > GLYPH_SIZE_PX);
        assert!(native.height() > GLYPH_SIZE_PX);
    }

    #[test]
    fn tint_color_lands_in_opaque_pixels() {
        let image = render_tinted(CHECK_SELECTED).unwrap();
        let solid = image
            .pixels()
            .find(|px| px.0[3] > 128)
            .expect("glyph should have visible pixels");
        // Green channel dominates for the success tint.
        assert!(solid.0[1] > solid.0[0]);
        assert!(solid.0[1] > solid.0[2]);
    }

    #[test]
    fn soft_tints_cap_alpha() {
        let image = render_tinted(PLAY).unwrap();
        let max_alpha = image.pixels().map(|px| px.0[3]).max().unwrap();
        let expected = (255.0 * opacity::TINT_SOFT).round() as u8;
        assert!(max_alpha <= expected);
        assert!(max_alpha > 0);
    }

    #[test]
    fn resize_normalizes_arbitrary_source_sizes() {
        for (w, h) in [(64, 64), (120, 48), (10, 10)] {
            let source = RgbaImage::from_pixel(w, h, image_rs::Rgba([255, 0, 0, 255]));
            let resized = resize_to_glyph(source);
            assert_eq!((resized.width(), resized.height()), (GLYPH_SIZE_PX, GLYPH_SIZE_PX));
        }
    }

    #[test]
    fn handle_lookup_covers_all_gallery_variants() {
        for variant in [CHECK_NORMAL, CHECK_SELECTED, CHECK_HIGHLIGHTED, PLAY] {
            // Smoke-test: cached path must not panic and must be repeatable.
            let _ = handle_for(variant);
            let _ = handle_for(variant);
        }
    }
}
