pub mod count;
pub mod date;
pub mod metrics;
pub mod table;

pub use count::clean_count;
pub use date::{parse_date, parse_date_phrase};
pub use metrics::{parse_metrics, Metrics};
pub use table::extract_jj_doses;
