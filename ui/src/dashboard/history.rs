use api::{HistoryEntry, RecordId};
use dioxus::prelude::*;

use crate::core::format;
use crate::t;

#[component]
pub fn HistorySelector(
    entries: Vec<HistoryEntry>,
    active_id: Option<RecordId>,
    on_select: EventHandler<RecordId>,
) -> Element {
    rsx! {
        section { class: "dashboard-card history",
            div { class: "dashboard-card__header",
                h2 { {t!("history-title")} }
                if !entries.is_empty() {
                    span { class: "dashboard-card__meta", {t!("history-count", count = entries.len())} }
                }
            }

            if entries.is_empty() {
                p { class: "dashboard-card__placeholder", {t!("history-empty")} }
            } else {
                ul { class: "history__items",
                    for entry in entries.iter().cloned() {
                        {render_entry(entry, active_id.as_ref(), on_select)}
                    }
                }
            }
        }
    }
}

fn render_entry(
    entry: HistoryEntry,
    active_id: Option<&RecordId>,
    on_select: EventHandler<RecordId>,
) -> Element {
    let is_active = active_id == Some(&entry.id);
    let title = entry_title(&entry);
    let stamp = entry.uploaded_at.as_deref().map(format::format_upload_time);
    let key = entry.id.to_string();
    let item_class = if is_active {
        "history__item history__item--active"
    } else {
        "history__item"
    };
    let id = entry.id;

    rsx! {
        li { key: "{key}", class: "{item_class}",
            button {
                r#type: "button",
                class: "history__button",
                onclick: move |_| on_select.call(id.clone()),
                span { class: "history__name", "{title}" }
                if let Some(stamp) = stamp {
                    span { class: "history__timestamp", "{stamp}" }
                }
            }
        }
    }
}

fn entry_title(entry: &HistoryEntry) -> String {
    match entry.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => t!("history-untitled", id = entry.id.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_entries_use_their_name() {
        let entry = HistoryEntry {
            id: RecordId::new("4"),
            name: Some("  plant_a.csv ".into()),
            uploaded_at: None,
        };
        assert_eq!(entry_title(&entry), "plant_a.csv");
    }

    #[test]
    fn unnamed_entries_fall_back_to_id() {
        crate::i18n::init();
        let entry = HistoryEntry {
            id: RecordId::new("4"),
            name: Some(String::new()),
            uploaded_at: None,
        };
        let title = entry_title(&entry);
        assert!(title.contains('4'), "unexpected fallback title {title:?}");
    }
}
