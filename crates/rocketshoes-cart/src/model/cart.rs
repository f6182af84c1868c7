//! The cart value and the pure transformations applied to it.
//!
//! Every transformation borrows the current cart and returns a new one, leaving the
//! original untouched; the cart actor swaps the result in once it has been persisted.

use super::product::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// Ordered cart lines, unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<Product>,
}

impl Cart {
    pub fn new(lines: Vec<Product>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[Product] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.lines.iter().find(|product| product.id == id)
    }

    /// Returns a copy where the line for `id` carries `amount`. Other lines and the
    /// order are preserved; a missing id yields an identical copy.
    pub fn with_amount(&self, id: ProductId, amount: u32) -> Self {
        let lines = self
            .lines
            .iter()
            .map(|product| {
                if product.id == id {
                    Product {
                        amount,
                        ..product.clone()
                    }
                } else {
                    product.clone()
                }
            })
            .collect();
        Self { lines }
    }

    /// Returns a copy with `product` appended at the end.
    pub fn with_appended(&self, product: Product) -> Self {
        let mut lines = self.lines.clone();
        lines.push(product);
        Self { lines }
    }

    /// Returns a copy without the line for `id`.
    pub fn without(&self, id: ProductId) -> Self {
        let lines = self
            .lines
            .iter()
            .filter(|product| product.id != id)
            .cloned()
            .collect();
        Self { lines }
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self.lines.len(),
            items: self.lines.iter().map(|p| u64::from(p.amount)).sum(),
            total: self.lines.iter().map(Product::subtotal).sum(),
        }
    }
}

/// Totals derived from a cart snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CartSummary {
    /// Distinct products.
    pub lines: usize,
    /// Sum of amounts.
    pub items: u64,
    /// Sum of `price * amount`.
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CatalogProduct;

    fn line(id: u32, price: f64, amount: u32) -> Product {
        Product::from_catalog(CatalogProduct::new(id, format!("Shoe {id}"), price), amount)
    }

    fn cart() -> Cart {
        Cart::new(vec![line(1, 100.0, 2), line(2, 50.0, 1), line(3, 10.0, 4)])
    }

    fn ids(cart: &Cart) -> Vec<u32> {
        cart.lines().iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn test_with_amount_touches_only_the_matching_line() {
        let original = cart();
        let updated = original.with_amount(ProductId(2), 7);

        assert_eq!(ids(&updated), vec![1, 2, 3]);
        assert_eq!(updated.find(ProductId(2)).unwrap().amount, 7);
        assert_eq!(updated.find(ProductId(1)), original.find(ProductId(1)));
        assert_eq!(updated.find(ProductId(3)), original.find(ProductId(3)));
        // the source snapshot is not modified
        assert_eq!(original.find(ProductId(2)).unwrap().amount, 1);
    }

    #[test]
    fn test_with_amount_on_missing_id_is_identity() {
        assert_eq!(cart().with_amount(ProductId(9), 3), cart());
    }

    #[test]
    fn test_without_keeps_relative_order() {
        let removed = cart().without(ProductId(2));
        assert_eq!(ids(&removed), vec![1, 3]);
        assert_eq!(cart().without(ProductId(9)), cart());
    }

    #[test]
    fn test_with_appended_goes_last() {
        let appended = cart().with_appended(line(8, 1.0, 1));
        assert_eq!(ids(&appended), vec![1, 2, 3, 8]);
    }

    #[test]
    fn test_summary() {
        let summary = cart().summary();
        assert_eq!(summary.lines, 3);
        assert_eq!(summary.items, 7);
        assert!((summary.total - 290.0).abs() < 1e-9);
        assert_eq!(Cart::default().summary(), CartSummary::default());
    }

    #[test]
    fn test_serializes_as_a_plain_array() {
        let json = serde_json::to_string(&Cart::new(vec![line(5, 1.0, 1)])).unwrap();
        assert!(json.starts_with('['));
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(ids(&back), vec![5]);
    }
}
