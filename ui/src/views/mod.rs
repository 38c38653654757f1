mod dashboard;
pub use dashboard::{use_dashboard_context, Dashboard};
