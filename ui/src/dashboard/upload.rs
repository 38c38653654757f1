use api::{Backend, EquipmentResult, HttpBackend};
use dioxus::prelude::*;

use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum UploadStatus {
    Idle,
    Working(String),
}

#[component]
pub fn UploadForm(on_upload: EventHandler<EquipmentResult>) -> Element {
    let backend = use_context::<HttpBackend>();
    let mut status = use_signal(|| UploadStatus::Idle);
    let busy = matches!(status(), UploadStatus::Working(_));

    let on_change = move |evt: FormEvent| {
        let backend = backend.clone();
        async move {
            let Some(engine) = evt.files() else {
                return;
            };
            let Some(path) = engine.files().into_iter().next() else {
                return;
            };

            let file_name = display_name(&path).to_string();
            status.set(UploadStatus::Working(file_name.clone()));

            match engine.read_file(&path).await {
                Some(bytes) => match backend.upload(&file_name, bytes).await {
                    Ok(result) => {
                        tracing::info!(id = %result.id, file_name = %file_name, "upload processed");
                        on_upload.call(result);
                    }
                    Err(err) => tracing::error!("upload of {file_name} failed: {err:#}"),
                },
                None => tracing::error!("could not read {path}"),
            }

            status.set(UploadStatus::Idle);
        }
    };

    rsx! {
        section { class: "dashboard-card upload",
            div { class: "dashboard-card__header",
                h2 { {t!("upload-title")} }
                if let UploadStatus::Working(name) = status() {
                    span { class: "dashboard-card__meta", {t!("upload-busy", name = name)} }
                }
            }
            label { class: "upload__field",
                span { class: "upload__hint", {t!("upload-hint")} }
                input {
                    r#type: "file",
                    class: "upload__input",
                    accept: ".csv",
                    multiple: false,
                    disabled: busy,
                    onchange: on_change,
                }
            }
        }
    }
}

/// Final path component; desktop file pickers hand over absolute paths.
fn display_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
