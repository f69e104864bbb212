use once_cell::sync::Lazy;
use serde::Deserialize;
use std::sync::Arc;

/// Catalog item with a fixed baseline of units sold
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogProduct {
    pub id: u32,
    pub name: String,
    pub base_units: u32,
}

impl CatalogProduct {
    pub fn new(id: u32, name: impl Into<String>, base_units: u32) -> Self {
        Self {
            id,
            name: name.into(),
            base_units,
        }
    }
}

/// Xerjoff collection used when the config does not provide its own catalog
static XERJOFF_COLLECTION: Lazy<Arc<[CatalogProduct]>> = Lazy::new(|| {
    [
        (1, "Italica", 52),
        (2, "Uden", 38),
        (3, "Richwood", 45),
        (4, "Cruz del Sur II", 29),
        (5, "Amber Gold", 47),
        (6, "Nio", 33),
        (7, "Casamorati 1888", 41),
        (8, "V Absolute", 36),
        (9, "Naxos", 58),
        (10, "Erba Pura", 49),
        (11, "Renaissance", 31),
        (12, "Accento", 44),
        (13, "Alexandria II", 42),
        (14, "Mefisto Gentiluomo", 27),
        (15, "Torino21", 35),
    ]
    .into_iter()
    .map(|(id, name, base_units)| CatalogProduct::new(id, name, base_units))
    .collect()
});

/// Immutable reference table the top-products ranking is computed from.
///
/// Cloning is cheap, all clones share the same entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCatalog {
    products: Arc<[CatalogProduct]>,
}

impl ProductCatalog {
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// Built-in table of 15 fragrances
    pub fn xerjoff_collection() -> Self {
        Self {
            products: Arc::clone(&*XERJOFF_COLLECTION),
        }
    }

    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::xerjoff_collection()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_fifteen_products() {
        let catalog = ProductCatalog::default();
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog.products()[0], CatalogProduct::new(1, "Italica", 52));
        assert_eq!(catalog.products()[8], CatalogProduct::new(9, "Naxos", 58));
        assert_eq!(catalog.products()[14], CatalogProduct::new(15, "Torino21", 35));
    }

    #[test]
    fn test_default_catalog_ids_are_unique() {
        let catalog = ProductCatalog::default();
        let mut ids: Vec<u32> = catalog.products().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_clones_share_entries() {
        let a = ProductCatalog::xerjoff_collection();
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.products, &b.products));
    }
}
