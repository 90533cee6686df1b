//! Hands an exported image to the user.
//!
//! Native builds write the file into the export directory; web builds let
//! the browser download it.

use std::path::{Path, PathBuf};

use crate::error::SketchResult;

/// Offer `bytes` as a download named `file_name`.
///
/// # Arguments
/// * `bytes` - Encoded PNG
/// * `file_name` - Name of the downloaded file
/// * `dir` - Destination directory (native only)
///
/// # Returns
/// Where the file ended up; on the web this is just `file_name`
#[cfg(not(target_arch = "wasm32"))]
pub fn offer_download(bytes: &[u8], file_name: &str, dir: &Path) -> SketchResult<PathBuf> {
    if !dir.exists() {
        log::info!("Creating export directory: {}", dir.display());
        std::fs::create_dir_all(dir)?;
    }
    let path = dir.join(file_name);
    std::fs::write(&path, bytes)?;
    log::info!("Saved {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

#[cfg(target_arch = "wasm32")]
pub fn offer_download(bytes: &[u8], file_name: &str, _dir: &Path) -> SketchResult<PathBuf> {
    web::download(bytes, file_name)?;
    log::info!("Offered {} for download ({} bytes)", file_name, bytes.len());
    Ok(PathBuf::from(file_name))
}

#[cfg(target_arch = "wasm32")]
mod web {
    use eframe::wasm_bindgen::{JsCast as _, JsValue};
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    use crate::error::{SketchError, SketchResult};

    fn js_error(err: JsValue) -> SketchError {
        SketchError::Download(format!("{err:?}"))
    }

    /// Click a temporary `<a download>` pointing at a blob URL.
    pub fn download(bytes: &[u8], file_name: &str) -> SketchResult<()> {
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let options = BlobPropertyBag::new();
        options.set_type("image/png");
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_error)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| SketchError::Download("no document".to_owned()))?;
        let anchor = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| SketchError::Download("not an anchor element".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();

        Url::revoke_object_url(&url).map_err(js_error)
    }
}
