//! URL mapping entity: the association between an alias and a long URL.

/// A persisted alias → URL mapping.
///
/// `id` is assigned by the store on insert and never leaves the service.
/// Mappings are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub url: String,
    pub alias: String,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: i64, url: String, alias: String) -> Self {
        Self { id, url, alias }
    }
}
