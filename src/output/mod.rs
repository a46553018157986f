pub mod row;
pub mod store;

pub use row::VaccinationRow;
pub use store::{DatasetStore, IncrementOutcome};
