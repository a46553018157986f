pub mod bulletin;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod parse;

pub use bulletin::Kenya;
pub use config::Config;
pub use error::BulletinError;
