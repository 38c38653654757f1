use api::{ApiConfig, Backend, EquipmentResult, HttpBackend};
use dioxus::prelude::*;

use crate::core::download;
use crate::dashboard::{DataPreview, EquipmentChart, HistorySelector, SummaryCards, UploadForm};
use crate::state::{effects, AppController, Command, Followup};
use crate::t;

/// Name and row count of the most recent upload, for the info line.
#[derive(Debug, Clone, PartialEq)]
struct UploadNote {
    name: String,
    total_count: u64,
}

impl UploadNote {
    fn from_result(result: &EquipmentResult) -> Self {
        Self {
            name: result
                .name
                .clone()
                .unwrap_or_else(|| result.id.to_string()),
            total_count: result.summary.total_count,
        }
    }
}

/// Info line for the loaded result; absent once a history pick has replaced the upload.
fn upload_note(controller: &AppController) -> Option<UploadNote> {
    controller.uploaded().map(UploadNote::from_result)
}

/// Install the backend client and the controller signal for the routed subtree.
///
/// Call once from the platform `App`, above anything keyed on the language, so a locale
/// switch re-renders the dashboard without dropping the loaded result. `load_config` runs
/// on the first render only.
pub fn use_dashboard_context(load_config: impl FnOnce() -> ApiConfig) {
    let controller = use_signal(AppController::default);
    use_context_provider(|| controller);
    use_context_provider(|| {
        let config = load_config();
        tracing::info!(base_url = config.base_url(), "backend configured");
        HttpBackend::new(config)
    });
}

#[component]
pub fn Dashboard() -> Element {
    let backend = use_context::<HttpBackend>();
    let controller = use_context::<Signal<AppController>>();

    let history_backend = backend.clone();
    let mut history = use_resource(move || {
        let backend = history_backend.clone();
        async move {
            match backend.history().await {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::error!("error loading history: {err:#}");
                    Vec::new()
                }
            }
        }
    });

    let dispatch = use_callback(move |command: Command| {
        let mut controller = controller;
        let Some(request) = controller.write().dispatch(command) else {
            return;
        };

        let backend = backend.clone();
        spawn(async move {
            let response = effects::perform(&backend, request).await;
            let followup = controller.write().resolve(response);
            if let Followup::SaveReport { file_name, bytes } = followup {
                match download::save_bytes(&file_name, download::PDF_MIME, bytes).await {
                    Ok(Some(path)) => tracing::info!("report saved to {path}"),
                    Ok(None) => tracing::info!("report download started ({file_name})"),
                    Err(err) => tracing::error!("error saving {file_name}: {err:#}"),
                }
            }
        });
    });

    let current = controller.read().current().cloned();
    let note = upload_note(&controller.read());
    let active_id = current.as_ref().map(|result| result.id.clone());
    let entries = history.cloned().unwrap_or_default();

    rsx! {
        section { class: "page page-dashboard",
            h1 { {t!("dashboard-title")} }
            p { {t!("dashboard-intro")} }

            div { class: "dashboard__panels",
                UploadForm {
                    on_upload: move |result: EquipmentResult| {
                        dispatch.call(Command::UploadCompleted(result));
                        history.restart();
                    },
                }
                HistorySelector {
                    entries,
                    active_id,
                    on_select: move |id| dispatch.call(Command::HistorySelected(id)),
                }
            }

            if let Some(note) = note {
                p { class: "dashboard__info",
                    {t!("upload-info", name = note.name, total = note.total_count)}
                }
            }

            match current {
                Some(result) => rsx! {
                    section { class: "dashboard-card dashboard-summary",
                        h2 { {t!("summary-title")} }
                        SummaryCards { summary: Some(result.summary.clone()) }
                    }
                    section { class: "dashboard-card dashboard-preview",
                        h2 { {t!("preview-title")} }
                        DataPreview { preview: result.preview_csv.clone() }
                    }
                    section { class: "dashboard-card dashboard-chart",
                        h2 { {t!("chart-section")} }
                        EquipmentChart { summary: Some(result.summary.clone()) }
                    }
                    div { class: "dashboard__actions",
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            onclick: move |_| dispatch.call(Command::DownloadRequested),
                            {t!("download-pdf")}
                        }
                    }
                },
                None => rsx! {
                    p { class: "dashboard-card__placeholder", {t!("dashboard-empty")} }
                },
            }
        }
    }
}
