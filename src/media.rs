//! Browser Media Helpers
//!
//! Reading uploaded files into inline `data:` URLs for the content store.

use content_store::MediaKind;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Image unless the MIME type says video
pub fn media_kind_for(mime: &str) -> MediaKind {
    if mime.starts_with("video") {
        MediaKind::Video
    } else {
        MediaKind::Image
    }
}

/// Millisecond timestamp id for new records
pub fn new_id() -> String {
    format!("{}", js_sys::Date::now() as u64)
}

/// First file chosen in the `<input type="file">` that fired `ev`
pub fn first_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let file = input.files()?.get(0);
    // Allow picking the same file again
    input.set_value("");
    file
}

/// Read a file into a `data:` URL
pub async fn read_as_data_url(file: &web_sys::File) -> Result<String, String> {
    let reader = web_sys::FileReader::new().map_err(|e| format!("FileReader unavailable: {:?}", e))?;

    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        let onload = Closure::once_into_js(move |ev: web_sys::ProgressEvent| {
            let _ = resolve.call1(&JsValue::NULL, &ev);
        });
        let onerror = Closure::once_into_js(move |ev: web_sys::ProgressEvent| {
            let _ = reject.call1(&JsValue::NULL, &ev);
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });

    reader
        .read_as_data_url(file)
        .map_err(|e| format!("Failed to start reading {}: {:?}", file.name(), e))?;
    JsFuture::from(promise)
        .await
        .map_err(|_| format!("Failed to read {}", file.name()))?;

    reader
        .result()
        .map_err(|e| format!("No result for {}: {:?}", file.name(), e))?
        .as_string()
        .ok_or_else(|| format!("{} did not produce a data URL", file.name()))
}

/// Log a failed upload and tell the editor
pub fn report_read_failure(err: &str) {
    log::error!("Upload failed: {}", err);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message("File too large to save in browser storage.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_for() {
        assert_eq!(media_kind_for("video/mp4"), MediaKind::Video);
        assert_eq!(media_kind_for("image/png"), MediaKind::Image);
        assert_eq!(media_kind_for(""), MediaKind::Image);
    }
}
