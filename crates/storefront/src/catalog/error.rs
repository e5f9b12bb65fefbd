use reqwest::StatusCode;
use thiserror::Error;

/// Shown to the visitor whenever the catalog cannot be loaded.
pub const CATALOG_LOAD_FAILED: &str = "Maʼlumotlarni yuklashda xatolik yuz berdi.";

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure or a body that is not a product listing.
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("catalog responded with status {0}")]
    Status(StatusCode),
}
