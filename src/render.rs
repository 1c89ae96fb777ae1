//! カート表示（端末向けテキスト）

use cart_form_common::{format_currency, CheckoutSummary, LineItem, Totals, Town};

const HEADERS: [&str; 5] = ["Item #", "Item Name", "Price", "Quantity", "Total"];

/// カート明細の表
///
/// 空のカートは表を出さずに案内文のみ返す。
pub fn render_cart(items: &[LineItem]) -> String {
    if items.is_empty() {
        return "カートは空です".to_string();
    }

    let rows: Vec<[String; 5]> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            [
                (index + 1).to_string(),
                item.name.clone(),
                format_currency(item.price),
                item.quantity.to_string(),
                format_currency(item.line_total()),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(&HEADERS.map(str::to_string), &widths));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        out.push('\n');
        out.push_str(&format_row(row, &widths));
    }
    out
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    cells
        .iter()
        .zip(widths.iter())
        .enumerate()
        .map(|(col, (cell, width))| {
            // 名前列のみ左寄せ
            if col == 1 {
                format!("{:<width$}", cell, width = *width)
            } else {
                format!("{:>width$}", cell, width = *width)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn render_totals(totals: &Totals, town: Option<Town>) -> String {
    let town_label = town.map(|t| format!(" ({})", t)).unwrap_or_default();
    format!(
        "Subtotal: {}\nShipping Fee{}: {}\nGrand Total: {}",
        format_currency(totals.subtotal),
        town_label,
        format_currency(totals.shipping_fee),
        format_currency(totals.grand_total),
    )
}

pub fn render_checkout(summary: &CheckoutSummary, town: Option<Town>) -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M");
    let payment = summary
        .payment
        .map(|p| p.label().to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "Checkout {}\nItems: {}\nPayment Method: {}\n{}\n→ {}",
        timestamp,
        summary.item_count,
        payment,
        render_totals(&summary.totals, town),
        summary.destination,
    )
}
