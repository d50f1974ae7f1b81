use std::io::Cursor;

use egui::ColorImage;
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use thiserror::Error;

use crate::renderer::CANVAS_SIZE;

pub const EXPORT_FILENAME: &str = "sketchpad.png";

/// Exported images are this many times larger than the live canvas
pub const EXPORT_SCALE: u32 = 4;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("snapshot has no pixels")]
    EmptySnapshot,

    #[error("snapshot buffer does not match its {width}x{height} size")]
    BufferSize { width: u32, height: u32 },

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to start download: {0}")]
    Download(String),
}

/// Pixel size of an exported image
pub fn export_size() -> [u32; 2] {
    let side = CANVAS_SIZE as u32 * EXPORT_SCALE;
    [side, side]
}

/// Resample a snapshot of the rendered canvas to `size`
pub fn upscale(snapshot: &ColorImage, size: [u32; 2]) -> Result<RgbaImage, ExportError> {
    let [width, height] = snapshot.size;
    if width == 0 || height == 0 {
        return Err(ExportError::EmptySnapshot);
    }
    let (width, height) = (width as u32, height as u32);

    let raw: Vec<u8> = snapshot
        .pixels
        .iter()
        .flat_map(|pixel| pixel.to_srgba_unmultiplied())
        .collect();
    let source =
        RgbaImage::from_raw(width, height, raw).ok_or(ExportError::BufferSize { width, height })?;

    Ok(imageops::resize(&source, size[0], size[1], FilterType::Triangle))
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Snapshot of the canvas to PNG bytes at export resolution
pub fn export_snapshot(snapshot: &ColorImage) -> Result<Vec<u8>, ExportError> {
    let image = upscale(snapshot, export_size())?;
    encode_png(&image)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_png(bytes: &[u8], filename: &str) -> Result<(), ExportError> {
    std::fs::write(filename, bytes)?;
    log::info!("Exported {} ({} bytes)", filename, bytes.len());
    Ok(())
}

/// Hand the PNG to the browser as a download
#[cfg(target_arch = "wasm32")]
pub fn save_png(bytes: &[u8], filename: &str) -> Result<(), ExportError> {
    use wasm_bindgen::JsCast;

    let js_err = |err: wasm_bindgen::JsValue| ExportError::Download(format!("{err:?}"));

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::Download("no document".to_owned()))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| ExportError::Download("not an anchor element".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
    log::info!("Exported {} ({} bytes)", filename, bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    fn snapshot(side: usize, color: Color32) -> ColorImage {
        ColorImage::new([side, side], color)
    }

    #[test]
    fn test_upscale_to_export_size() {
        let image = upscale(&snapshot(256, Color32::WHITE), export_size()).unwrap();
        assert_eq!(image.dimensions(), (1024, 1024));
        assert_eq!(image.get_pixel(512, 512).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_upscale_keeps_colors() {
        let image = upscale(&snapshot(4, Color32::from_rgb(255, 0, 0)), [16, 16]).unwrap();
        assert_eq!(image.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(15, 15).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_empty_snapshot_is_rejected() {
        let empty = ColorImage::new([0, 0], Color32::WHITE);
        assert!(matches!(
            export_snapshot(&empty),
            Err(ExportError::EmptySnapshot)
        ));
    }

    #[test]
    fn test_png_signature() {
        let bytes = export_snapshot(&snapshot(8, Color32::BLACK)).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1024, 1024));
    }
}
