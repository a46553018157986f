// src/fetch/mod.rs

pub mod download;
pub mod link;

pub use download::download_to_tempfile;
pub use link::{find_pdf_link, resolve_pdf_link};
