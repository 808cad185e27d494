// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//!
//! The branding SVG is embedded and rasterized at startup to produce an RGBA
//! icon for the window title bar. Failure degrades to `None`; the window then
//! falls back to the platform default icon.

use crate::error::{Error, Result};
use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/button_gallery.svg");

/// Side length of the rasterized window icon.
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded branding SVG and hand it to the windowing backend.
pub fn load_window_icon() -> Option<Icon> {
    let rgba = rasterize_branding(ICON_SIZE).ok()?;
    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).ok()
}

/// Rasterize the branding SVG to a square RGBA buffer of the given size.
fn rasterize_branding(target: u32) -> Result<Vec<u8>> {
    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let orig_size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        target as f32 / orig_size.width(),
        target as f32 / orig_size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(target, target)
        .ok_or_else(|| Error::Svg("icon raster has zero size".to_string()))?;

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap.data().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branding_asset_rasterizes_at_icon_size() {
        let rgba = rasterize_branding(ICON_SIZE).expect("embedded branding SVG should parse");
        assert_eq!(rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
        // The icon is not blank.
        assert!(rgba.iter().any(|&byte| byte != 0));
    }
}
