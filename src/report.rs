use anyhow::{Context, Result};

use std::{fmt::Display, fs, path::Path, time::Duration};

use crate::invoice::Invoice;

/// File the invoice is written to when no other path is given.
pub const DEFAULT_OUTPUT: &str = "ResultadosVentas.txt";

const WIDTH: usize = 66;

/// A printable invoice.
///
/// The [`Display`] implementation renders a fixed-width table with one row
/// per line item, followed by the total. If `elapsed` is set, the time taken
/// is reported on a final line.
#[derive(Debug)]
pub struct Report<'a> {
    invoice: &'a Invoice,
    elapsed: Option<Duration>,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(invoice: &'a Invoice) -> Self {
        Self {
            invoice,
            elapsed: None,
        }
    }

    /// Adds an elapsed time line to the end of the report.
    #[must_use]
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }

    /// Writes the report to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns any errors from writing the file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string())
            .with_context(|| format!("writing report to {}", path.display()))
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:*^WIDTH$}", " Invoice ")?;
        writeln!(
            f,
            "{:<30}{:>10}{:>15}{:>11}{}",
            "Product", "Quantity", "Unit", "", "Subtot"
        )?;
        writeln!(f, "{:-<WIDTH$}", "")?;
        for item in &self.invoice.items {
            writeln!(
                f,
                "{:<30}{:>10}{:>15.2}{:>11}{:.2}",
                item.product, item.quantity, item.unit_price, "", item.subtotal
            )?;
        }
        writeln!(f, "{:-<WIDTH$}", "")?;
        writeln!(f, "{:<WIDTH$}${:.2}", "Total:", self.invoice.total_cost)?;
        writeln!(f, "{:*<WIDTH$}", "")?;
        if let Some(elapsed) = self.elapsed {
            writeln!(f)?;
            writeln!(f, "Elapsed time: {:.2} s", elapsed.as_secs_f64())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::LineItem;

    fn invoice() -> Invoice {
        Invoice {
            total_cost: 6.0,
            items: vec![LineItem {
                product: "Apple".into(),
                quantity: 4.0,
                unit_price: 1.5,
                subtotal: 6.0,
            }],
            diagnostics: Vec::new(),
        }
    }

    #[test]
    fn display_renders_fixed_width_rows() {
        let text = Report::new(&invoice()).to_string();
        let row = format!("{:<30}{:>10}{:>15}{:>11}{}", "Apple", "4", "1.50", "", "6.00");
        assert!(text.lines().any(|l| l == row), "{text}");
        assert!(text.contains("$6.00"), "{text}");
        assert!(!text.contains("Elapsed time"), "{text}");
    }

    #[test]
    fn display_matches_expected_layout() {
        let mut invoice = invoice();
        invoice.items.push(LineItem {
            product: "Pear".into(),
            quantity: 2.0,
            unit_price: 0.75,
            subtotal: 1.5,
        });
        invoice.total_cost = 7.5;
        let want = "\
**************************** Invoice *****************************
Product                         Quantity           Unit           Subtot
------------------------------------------------------------------
Apple                                  4           1.50           6.00
Pear                                   2           0.75           1.50
------------------------------------------------------------------
Total:                                                            $7.50
******************************************************************
";
        assert_eq!(Report::new(&invoice).to_string(), want);
    }

    #[test]
    fn display_shows_fractional_quantities() {
        let mut invoice = invoice();
        invoice.items[0].quantity = 2.5;
        let text = Report::new(&invoice).to_string();
        assert!(text.contains("       2.5"), "{text}");
    }

    #[test]
    fn display_renders_empty_invoice() {
        let text = Report::new(&Invoice::default()).to_string();
        assert!(text.contains("Total:"), "{text}");
        assert!(text.contains("$0.00"), "{text}");
    }

    #[test]
    fn with_elapsed_fn_adds_elapsed_time_line() {
        let invoice = invoice();
        let text = Report::new(&invoice)
            .with_elapsed(Duration::from_millis(1250))
            .to_string();
        assert!(text.ends_with("Elapsed time: 1.25 s\n"), "{text}");
    }

    #[test]
    fn write_to_fn_writes_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);
        let invoice = invoice();
        let report = Report::new(&invoice);
        report.write_to(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), report.to_string());
    }
}
