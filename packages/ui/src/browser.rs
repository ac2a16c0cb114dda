//! Thin wrappers over the browser APIs the dashboard needs.
//!
//! Each function has a WASM implementation backed by `web-sys` and a native
//! fallback so the crate still builds and runs outside the browser.

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use store::{CsvExport, Theme};

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub fn today() -> NaiveDate {
    now().date()
}

/// Origin of the current page, e.g. `"http://localhost:5000"`.
pub fn origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.location().origin().ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Set `data-theme` on the document element.
pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("theme set to {}", theme.as_str());
    }
}

/// Ask the user to confirm a destructive action.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("auto-confirming: {message}");
        true
    }
}

pub fn navigate(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("navigate to {url}");
    }
}

/// Hand a generated file to the user.
///
/// In the browser this clicks a temporary object-URL link attached to the
/// body; the URL is released once the click has been handled. Natively the
/// file is written to the downloads directory.
pub fn download(export: &CsvExport) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&export.contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(CsvExport::MIME_TYPE);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(js_error)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

        let anchor = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(js_error_from_element)?;
        anchor.set_href(&url);
        anchor.set_download(&export.filename);

        // The link must be in the document when clicked, and the URL must
        // outlive the click.
        let body = document.body().ok_or("no body")?;
        body.append_child(&anchor).map_err(js_error)?;
        anchor.click();
        anchor.remove();
        gloo_timers::callback::Timeout::new(0, move || {
            if let Err(e) = web_sys::Url::revoke_object_url(&url) {
                tracing::warn!("cannot revoke export url: {e:?}");
            }
        })
        .forget();
        Ok(())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let dir = dirs::download_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
        let path = save_export(&dir, export)?;
        tracing::info!("export written to {}", path.display());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn save_export(dir: &std::path::Path, export: &CsvExport) -> Result<std::path::PathBuf, String> {
    let path = dir.join(&export.filename);
    std::fs::write(&path, &export.contents).map_err(|e| e.to_string())?;
    Ok(path)
}

#[cfg(target_arch = "wasm32")]
fn js_error(value: wasm_bindgen::JsValue) -> String {
    format!("{value:?}")
}

#[cfg(target_arch = "wasm32")]
fn js_error_from_element(element: web_sys::Element) -> String {
    format!("unexpected element <{}>", element.tag_name())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use store::{export_visitors, Visitor};

    #[test]
    fn test_export_lands_in_directory_under_its_name() {
        let visitor: Visitor = serde_json::from_value(serde_json::json!({
            "id": 1,
            "first_name": "ALI",
            "last_name": "VELI",
            "visitor_type": "misafir",
            "entry_datetime": "2024-01-01 09:00"
        }))
        .unwrap();
        let export = export_visitors(&[visitor], today()).unwrap();

        let dir = std::env::temp_dir().join(format!("visitor-desk-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = save_export(&dir, &export).unwrap();

        assert_eq!(path, dir.join(&export.filename));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), export.contents);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
