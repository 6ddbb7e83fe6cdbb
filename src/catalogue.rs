use serde::Deserialize;
use serde_with::{serde_as, DefaultOnError};

use std::collections::HashMap;

/// One entry in a price catalogue file.
///
/// Any other fields present in the JSON object are ignored. Fields that are
/// missing, or hold a value of the wrong type, deserialize as `None`.
#[serde_as]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PriceEntry {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub title: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub price: Option<f64>,
}

impl PriceEntry {
    #[must_use]
    pub fn new(title: &str, price: f64) -> Self {
        Self {
            title: Some(title.to_string()),
            price: Some(price),
        }
    }
}

/// What the catalogue knows about a title.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Lookup {
    /// The title is listed with this unit price.
    Priced(f64),
    /// The title is listed, but its first entry carries no price.
    Unpriced,
}

/// Maps product titles to unit prices.
///
/// When a title appears more than once, only its first entry counts. Entries
/// without a title can never be matched, so they are left out.
#[derive(Debug, Default)]
pub struct Catalogue {
    prices: HashMap<String, Option<f64>>,
}

impl Catalogue {
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = PriceEntry>) -> Self {
        let mut prices = HashMap::new();
        for entry in entries {
            if let Some(title) = entry.title {
                prices.entry(title).or_insert(entry.price);
            }
        }
        Self { prices }
    }

    /// Returns the price information for `title`, or `None` if no catalogue
    /// entry has that title.
    ///
    /// # Examples
    ///
    /// ```
    /// # use compute_sales::{Catalogue, Lookup, PriceEntry};
    /// let catalogue = Catalogue::new(vec![
    ///     PriceEntry::new("A", 1.0),
    ///     PriceEntry::new("A", 2.0),
    /// ]);
    /// assert_eq!(catalogue.price_of("A"), Some(Lookup::Priced(1.0)));
    /// assert_eq!(catalogue.price_of("B"), None);
    /// ```
    #[must_use]
    pub fn price_of(&self, title: &str) -> Option<Lookup> {
        self.prices.get(title).map(|price| match price {
            Some(p) => Lookup::Priced(*p),
            None => Lookup::Unpriced,
        })
    }

    /// Number of distinct titles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
