mod chart;
pub use chart::{axis_max, bar_layout, BarGeometry, ChartFrame, ChartSeries, EquipmentChart, DATASET_LABEL};

mod history;
pub use history::HistorySelector;

mod preview;
pub use preview::{DataPreview, PreviewGrid};

mod summary;
pub use summary::{SummaryCards, SummaryFigures};

mod upload;
pub use upload::UploadForm;
