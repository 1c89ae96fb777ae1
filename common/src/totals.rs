//! 小計・総計の算出と通貨表示

use crate::types::LineItem;

pub const CURRENCY_SYMBOL: &str = "₱";

/// 合計額
///
/// 毎回明細全体から再計算する。キャッシュはしない。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub subtotal: f64,
    pub shipping_fee: f64,
    pub grand_total: f64,
}

impl Totals {
    pub fn compute(items: &[LineItem], shipping_fee: f64) -> Self {
        let subtotal = items.iter().map(LineItem::line_total).sum::<f64>();
        Self {
            subtotal,
            shipping_fee,
            grand_total: subtotal + shipping_fee,
        }
    }
}

/// PHP表記（小数2桁、3桁区切り）: `₱1,234.50`
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}NaN", CURRENCY_SYMBOL);
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    format!("{}{}{}.{:02}", sign, CURRENCY_SYMBOL, whole, cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemId;

    fn item(id: u64, price: f64, quantity: u32) -> LineItem {
        LineItem {
            id: ItemId::new(id),
            name: format!("item{}", id),
            price,
            quantity,
        }
    }

    #[test]
    fn test_compute_totals() {
        let items = vec![item(1, 50.0, 2), item(2, 12.5, 4)];
        let totals = Totals::compute(&items, 50.0);
        assert_eq!(totals.subtotal, 150.0);
        assert_eq!(totals.shipping_fee, 50.0);
        assert_eq!(totals.grand_total, 200.0);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let items = vec![item(1, 0.1, 3), item(2, 19.99, 7)];
        let first = Totals::compute(&items, 30.0);
        let second = Totals::compute(&items, 30.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_cart() {
        let totals = Totals::compute(&[], 80.0);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.grand_total, 80.0);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "₱0.00");
        assert_eq!(format_currency(100.0), "₱100.00");
        assert_eq!(format_currency(1234.5), "₱1,234.50");
        assert_eq!(format_currency(1_000_000.0), "₱1,000,000.00");
        assert_eq!(format_currency(0.005), "₱0.01");
        assert_eq!(format_currency(-5.0), "-₱5.00");
        assert_eq!(format_currency(f64::NAN), "₱NaN");
    }
}
