//! Text formatting shared by the TUI and the non-interactive output.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::state::Product;

/// Render an amount with two decimals behind `currency`.
#[must_use]
pub fn format_price(amount: f64, currency: &str) -> String {
    format!("{currency}{amount:.2}")
}

/// What: Price label for a product.
///
/// Inputs:
/// - `p`: Product
/// - `currency`: Currency prefix
///
/// Output:
/// - `"$99.00 (was $120.00)"` when discounted, `"$120.00"` otherwise.
#[must_use]
pub fn price_label(p: &Product, currency: &str) -> String {
    let paid = p.effective_price();
    if paid < p.price {
        format!(
            "{} (was {})",
            format_price(paid, currency),
            format_price(p.price, currency)
        )
    } else {
        format_price(p.price, currency)
    }
}

/// What: Short attribute summary such as `Acme · All-Season · 225/45R17 · 2021`.
///
/// Inputs:
/// - `p`: Product
///
/// Output:
/// - Present values of brand, category, size, year and driving type joined by ` · `.
#[must_use]
pub fn product_subtitle(p: &Product) -> String {
    [&p.brand, &p.category, &p.size, &p.year, &p.driving_type]
        .into_iter()
        .filter_map(|v| v.as_deref())
        .collect::<Vec<_>>()
        .join(" · ")
}

/// What: Cut `s` to at most `max` terminal columns.
///
/// Inputs:
/// - `s`: Text to fit
/// - `max`: Column budget
///
/// Output:
/// - `s` unchanged when it fits; otherwise a prefix ending in `…`.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Pad `s` with spaces to `width` terminal columns (no truncation).
#[must_use]
pub fn pad_to_width(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let mut out = s.to_string();
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(w)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FacetDimension;

    #[test]
    /// What: Price labels show the sale price first
    fn format_price_labels() {
        let mut p = Product::new("1", "A").with_price(120.0);
        assert_eq!(price_label(&p, "$"), "$120.00");
        p.discount_price = Some(99.5);
        assert_eq!(price_label(&p, "€"), "€99.50 (was €120.00)");
        p.discount_price = Some(120.0);
        assert_eq!(price_label(&p, "$"), "$120.00");
    }

    #[test]
    /// What: Subtitle skips absent attributes
    fn format_subtitle_skips_missing() {
        let p = Product::new("1", "A")
            .with_facet(FacetDimension::Brand, "Acme")
            .with_facet(FacetDimension::Year, "2021");
        assert_eq!(product_subtitle(&p), "Acme · 2021");
        assert_eq!(product_subtitle(&Product::new("2", "B")), "");
    }

    #[test]
    /// What: Truncation respects wide characters and adds an ellipsis
    fn format_truncate_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
        assert_eq!(truncate_to_width("タイヤ", 4), "タ…");
        assert_eq!(truncate_to_width("abc", 0), "");
        assert_eq!(pad_to_width("ab", 4), "ab  ");
    }
}
