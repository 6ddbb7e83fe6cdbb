use std::fmt::Display;

use crate::{
    catalogue::{Catalogue, Lookup, PriceEntry},
    sales::SaleRecord,
};

/// One priced sale, ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct LineItem {
    pub product: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub subtotal: f64,
}

/// A sale that could not be priced, and why.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// No catalogue entry has this title. `None` means the sale had no product.
    UnmatchedProduct { product: Option<String> },
    /// The product is in the catalogue, but the sale has no quantity.
    MissingQuantity { product: String },
    /// The product's catalogue entry has no price.
    MissingPrice { product: String },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedProduct { product: Some(name) } => {
                write!(f, "product '{name}' not found in price catalogue")
            }
            Self::UnmatchedProduct { product: None } => {
                write!(f, "sale has no product, skipped")
            }
            Self::MissingQuantity { product } => {
                write!(f, "sale of product '{product}' has no quantity, skipped")
            }
            Self::MissingPrice { product } => {
                write!(f, "product '{product}' has no price in catalogue, skipped")
            }
        }
    }
}

/// The result of pricing a sales record.
///
/// `items` follows the order of the sales record, with unpriced sales left
/// out. Each of those has an entry in `diagnostics` instead, in the same
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Invoice {
    pub total_cost: f64,
    pub items: Vec<LineItem>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Prices every sale in `sales` against `catalogue`.
///
/// Subtotals are summed in sales record order.
///
/// # Examples
///
/// ```
/// # use compute_sales::{compute, Catalogue, Diagnostic, PriceEntry, SaleRecord};
/// let catalogue = Catalogue::new(vec![PriceEntry::new("Apple", 1.5)]);
/// let invoice = compute(&catalogue, &[SaleRecord::new("Banana", 2.0)]);
/// assert_eq!(invoice.total_cost, 0.0);
/// assert!(invoice.items.is_empty());
/// assert_eq!(
///     invoice.diagnostics,
///     vec![Diagnostic::UnmatchedProduct { product: Some("Banana".into()) }]
/// );
/// ```
#[must_use]
pub fn compute(catalogue: &Catalogue, sales: &[SaleRecord]) -> Invoice {
    let mut invoice = Invoice::default();
    for sale in sales {
        let Some((product, lookup)) = sale
            .product
            .as_deref()
            .and_then(|p| catalogue.price_of(p).map(|l| (p, l)))
        else {
            invoice.diagnostics.push(Diagnostic::UnmatchedProduct {
                product: sale.product.clone(),
            });
            continue;
        };
        let Lookup::Priced(unit_price) = lookup else {
            invoice.diagnostics.push(Diagnostic::MissingPrice {
                product: product.to_string(),
            });
            continue;
        };
        let Some(quantity) = sale.quantity else {
            invoice.diagnostics.push(Diagnostic::MissingQuantity {
                product: product.to_string(),
            });
            continue;
        };
        let subtotal = unit_price * quantity;
        invoice.total_cost += subtotal;
        invoice.items.push(LineItem {
            product: product.to_string(),
            quantity,
            unit_price,
            subtotal,
        });
    }
    invoice
}

/// Like [`compute`], but takes the catalogue entries as read from a file.
#[must_use]
pub fn compute_total_cost(catalogue: Vec<PriceEntry>, sales: &[SaleRecord]) -> Invoice {
    compute(&Catalogue::new(catalogue), sales)
}
