//! In-memory catalog of fetched products.

use crate::catalog::Product;
use crate::ids::ProductId;

/// The full product list as last fetched, plus the product open for detail
/// display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    selected: Option<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole product list, keeping server order.
    ///
    /// A selected product is refreshed from the new list, or dropped when
    /// its id is no longer listed.
    pub fn replace_all(&mut self, products: Vec<Product>) {
        self.products = products;

        self.selected = self
            .selected
            .take()
            .and_then(|s| self.products.iter().find(|p| p.id == s.id).cloned());
    }

    /// All products, in server order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn find_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products in the given category, in server order.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Mark a product as selected for detail display.
    ///
    /// The product is not checked against the current list.
    pub fn select(&mut self, product: Product) {
        self.selected = Some(product);
    }

    /// Select the listed product with `id`.
    ///
    /// Returns the selected product, or `None` (leaving the selection as it
    /// was) when no product has that id.
    pub fn select_by_id(&mut self, id: &ProductId) -> Option<&Product> {
        let product = self.find_by_id(id)?.clone();
        self.selected = Some(product);
        self.selected.as_ref()
    }

    /// The currently selected product.
    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    /// Drop the current selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Remove all products and the selection.
    pub fn clear(&mut self) {
        self.products.clear();
        self.selected = None;
    }

    /// Number of listed products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: Option<f64>) -> Product {
        Product::new(id, format!("Product {}", id), "софт-скил", price)
    }

    #[test]
    fn test_replace_all_keeps_server_order() {
        let mut catalog = Catalog::new();
        catalog.replace_all(vec![product("b", Some(1.0)), product("a", None), product("c", Some(3.0))]);

        let ids: Vec<&str> = catalog.all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_replace_all_discards_previous_products() {
        let mut catalog = Catalog::new();
        catalog.replace_all(vec![product("1", Some(1.0))]);
        catalog.replace_all(vec![product("2", Some(2.0))]);

        assert!(catalog.find_by_id(&ProductId::new("1")).is_none());
        assert!(catalog.find_by_id(&ProductId::new("2")).is_some());
    }

    #[test]
    fn test_find_by_id_missing() {
        let mut catalog = Catalog::new();
        let missing = ProductId::new("missing");
        assert!(catalog.find_by_id(&missing).is_none());

        catalog.replace_all(vec![product("1", Some(100.0))]);
        assert!(catalog.find_by_id(&missing).is_none());

        catalog.select(product("1", Some(100.0)));
        assert!(catalog.find_by_id(&missing).is_none());
    }

    #[test]
    fn test_select_is_unconditional() {
        let mut catalog = Catalog::new();
        catalog.select(product("unlisted", None));
        assert_eq!(catalog.selected().map(|p| p.id.as_str()), Some("unlisted"));
    }

    #[test]
    fn test_select_by_id() {
        let mut catalog = Catalog::new();
        catalog.replace_all(vec![product("1", Some(100.0)), product("2", None)]);

        assert_eq!(
            catalog.select_by_id(&ProductId::new("2")).map(|p| p.id.as_str()),
            Some("2")
        );
        assert!(catalog.select_by_id(&ProductId::new("nope")).is_none());
        assert_eq!(catalog.selected().map(|p| p.id.as_str()), Some("2"));
    }

    #[test]
    fn test_replace_all_drops_stale_selection() {
        let mut catalog = Catalog::new();
        catalog.replace_all(vec![product("1", Some(100.0)), product("2", None)]);
        catalog.select_by_id(&ProductId::new("1"));

        catalog.replace_all(vec![product("2", None)]);
        assert!(catalog.selected().is_none());
    }

    #[test]
    fn test_replace_all_keeps_listed_selection() {
        let mut catalog = Catalog::new();
        catalog.replace_all(vec![product("1", Some(100.0))]);
        catalog.select_by_id(&ProductId::new("1"));

        catalog.replace_all(vec![product("0", None), product("1", Some(100.0))]);
        assert_eq!(catalog.selected().map(|p| p.id.as_str()), Some("1"));
    }

    #[test]
    fn test_replace_all_refreshes_selection() {
        let id = ProductId::new("1");
        let mut catalog = Catalog::new();
        catalog.replace_all(vec![Product::new("1", "Old", "софт-скил", Some(100.0))]);
        catalog.select_by_id(&id);

        catalog.replace_all(vec![Product::new("1", "New", "софт-скил", None)]);

        let selected = catalog.selected().unwrap();
        assert_eq!(selected.title, "New");
        assert!(!selected.is_for_sale());
        assert_eq!(catalog.selected(), catalog.find_by_id(&id));
    }

    #[test]
    fn test_by_category() {
        let mut catalog = Catalog::new();
        let mut other = product("2", Some(5.0));
        other.category = "другое".to_string();
        catalog.replace_all(vec![product("1", Some(1.0)), other, product("3", Some(3.0))]);

        let ids: Vec<&str> = catalog.by_category("софт-скил").map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_clear() {
        let mut catalog = Catalog::new();
        catalog.replace_all(vec![product("1", Some(1.0))]);
        catalog.select_by_id(&ProductId::new("1"));

        catalog.clear_selection();
        assert!(catalog.selected().is_none());

        catalog.clear();
        assert!(catalog.is_empty());
    }
}
