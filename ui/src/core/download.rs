//! Saving server-generated files on the user's machine.

use anyhow::Result;

pub const PDF_MIME: &str = "application/pdf";

/// Hand `bytes` to the platform as a file called `file_name`.
///
/// On the web this triggers a browser download and returns `None`; natively the file is
/// written under the app's data directory and the written path is returned.
pub async fn save_bytes(file_name: &str, mime: &str, bytes: Vec<u8>) -> Result<Option<String>> {
    #[cfg(target_arch = "wasm32")]
    {
        use anyhow::{anyhow, Context};
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| anyhow!("failed to create blob"))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| anyhow!("unable to create object URL"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .context("document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| anyhow!("unable to create anchor"))?
            .dyn_into()
            .map_err(|_| anyhow!("anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .context("missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let dir = reports_dir()?;
        write_into(&dir, file_name, &bytes).map(Some)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn reports_dir() -> Result<std::path::PathBuf> {
    use anyhow::Context;

    let dirs = directories::ProjectDirs::from("com", "EquipViz", "EquipViz")
        .context("unable to determine reports directory")?;
    Ok(dirs.data_dir().join("reports"))
}

#[cfg(not(target_arch = "wasm32"))]
fn write_into(dir: &std::path::Path, file_name: &str, bytes: &[u8]) -> Result<String> {
    use anyhow::Context;
    use std::fs;

    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(file_name);
    fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(path.to_string_lossy().to_string())
}
