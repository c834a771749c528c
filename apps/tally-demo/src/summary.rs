//! Order summary rendering.

use std::fmt::Write;

use tally_core::OrderQuote;

/// Renders a priced order for the terminal.
///
/// ```text
/// Order Summary:
///   Laptop [ELECTRONICS]: $999.99 x 1 = $999.99 → $1099.99
///   ...
///
/// Subtotal: $1290.91
/// Shipping: FREE
/// Total Amount: $1290.91
/// ```
pub fn render_summary(quote: &OrderQuote) -> String {
    let mut out = String::from("Order Summary:\n");

    for line in &quote.lines {
        let category = if line.category.is_empty() {
            String::new()
        } else {
            format!(" [{}]", line.category)
        };

        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "  {}{}: {} x {} = {}",
            line.product_name, category, line.unit_price, line.quantity, line.line_total
        );
        if line.adjusted_total != line.line_total {
            let _ = write!(out, " → {}", line.adjusted_total);
        }
        out.push('\n');
    }

    let shipping = if quote.has_free_shipping() {
        "FREE".to_string()
    } else {
        quote.shipping.to_string()
    };

    let _ = writeln!(out, "\nSubtotal: {}", quote.subtotal);
    let _ = writeln!(out, "Shipping: {}", shipping);
    let _ = writeln!(out, "Total Amount: {}", quote.total);
    out
}
