#![doc = include_str!("../README.md")]
mod catalogue;
mod invoice;
mod load;
mod report;
mod sales;

pub use catalogue::{Catalogue, Lookup, PriceEntry};
pub use invoice::{compute, compute_total_cost, Diagnostic, Invoice, LineItem};
pub use load::{load_catalogue, load_json, load_sales, LoadError};
pub use report::{Report, DEFAULT_OUTPUT};
pub use sales::SaleRecord;
