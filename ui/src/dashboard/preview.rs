use dioxus::prelude::*;

/// Grid built from the backend's CSV preview.
///
/// Splitting is a literal split on `,`: quoted fields with embedded commas are not
/// understood and come out as extra cells. The preview only ever echoes what the server
/// produced, so this stays deliberately naive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreviewGrid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PreviewGrid {
    /// `None` when there is no preview at all. Blank input yields an empty grid.
    pub fn parse(preview: Option<&str>) -> Option<Self> {
        let preview = preview?;
        let mut lines = preview.split('\n').filter(|line| !line.trim().is_empty());

        let Some(header_line) = lines.next() else {
            return Some(Self::default());
        };

        Some(Self {
            headers: split_cells(header_line),
            rows: lines.map(split_cells).collect(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

fn split_cells(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

#[component]
pub fn DataPreview(preview: Option<String>) -> Element {
    let Some(grid) = PreviewGrid::parse(preview.as_deref()) else {
        return rsx! {};
    };

    rsx! {
        div { class: "preview",
            table { class: "preview__table",
                thead {
                    tr {
                        for (idx, header) in grid.headers.iter().enumerate() {
                            th { key: "{idx}", "{header}" }
                        }
                    }
                }
                tbody {
                    for (row_idx, row) in grid.rows.iter().enumerate() {
                        tr { key: "{row_idx}",
                            for (col_idx, cell) in row.iter().enumerate() {
                                td { key: "{col_idx}", "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
