use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::products::Product;
use crate::ConfigError;

/// The product list, in the order the backend (or catalog file) lists it.
///
/// Browsing follows the ordering form: pick a brand, then a style within the
/// brand, then a color within the style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct brands in first-appearance order.
    #[must_use]
    pub fn brands(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|p| p.brand.as_str()))
    }

    /// Distinct styles of `brand` in first-appearance order.
    #[must_use]
    pub fn styles(&self, brand: &str) -> Vec<&str> {
        distinct(
            self.products
                .iter()
                .filter(|p| p.brand == brand)
                .map(|p| p.style.as_str()),
        )
    }

    /// Colors offered for `brand` + `style`, in catalog order.
    #[must_use]
    pub fn colors(&self, brand: &str, style: &str) -> Vec<&str> {
        self.products
            .iter()
            .filter(|p| p.brand == brand && p.style == style)
            .map(|p| p.color.as_str())
            .collect()
    }

    /// First product matching all three selectors.
    #[must_use]
    pub fn find(&self, brand: &str, style: &str, color: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.brand == brand && p.style == style && p.color == color)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

/// Diopter choices for the current selection.
///
/// With no product selected yet the whole master list is shown.
#[must_use]
pub fn diopter_options<S: AsRef<str>>(product: Option<&Product>, master: &[S]) -> Vec<String> {
    match product {
        Some(product) => product.diopter_options(master),
        None => master.iter().map(|s| s.as_ref().to_owned()).collect(),
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Wrapped { products: Vec<Product> },
    Bare(Vec<Product>),
}

/// Load and validate a catalog from a YAML (or JSON) file.
///
/// Accepts either a top-level `products:` list or a bare list of products.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog = parse_catalog(&content)?;
    tracing::debug!(
        path = %path.display(),
        products = catalog.products.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Parse and validate catalog text.
///
/// # Errors
///
/// Returns `ConfigError` if the text is not a product list or fails validation.
pub fn parse_catalog(content: &str) -> Result<Catalog, ConfigError> {
    let products = match serde_yaml::from_str::<CatalogFile>(content)? {
        CatalogFile::Wrapped { products } | CatalogFile::Bare(products) => products,
    };

    validate_products(&products)?;
    Ok(Catalog::new(products))
}

fn validate_products(products: &[Product]) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for product in products {
        if product.id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' has an empty id",
                product.display_name()
            )));
        }

        if product.price.is_sign_negative() {
            return Err(ConfigError::Validation(format!(
                "product '{}' has negative price {}",
                product.id, product.price
            )));
        }

        if !seen_ids.insert(product.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate product id: '{}'",
                product.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
