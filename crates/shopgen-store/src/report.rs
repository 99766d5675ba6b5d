use chrono::NaiveDate;
use serde::Serialize;

/// Default number of rows in the report preview.
pub const PREVIEW_ROWS: usize = 5;

/// One denormalized order line.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct ReportRow {
    pub customer_name: String,
    pub email: String,
    pub order_id: i64,
    pub order_date: NaiveDate,
    pub product_name: String,
    pub quantity: i64,
    pub price: f64,
    pub total_amount_paid: f64,
}

const HEADERS: [&str; 8] = [
    "customer_name",
    "email",
    "order_id",
    "order_date",
    "product_name",
    "quantity",
    "price",
    "total_amount_paid",
];

/// Numeric columns are right-aligned.
const RIGHT_ALIGNED: [bool; 8] = [false, false, true, false, false, true, true, true];

impl ReportRow {
    fn cells(&self) -> [String; 8] {
        [
            self.customer_name.clone(),
            self.email.clone(),
            self.order_id.to_string(),
            self.order_date.to_string(),
            self.product_name.clone(),
            self.quantity.to_string(),
            format!("{:.2}", self.price),
            format!("{:.2}", self.total_amount_paid),
        ]
    }
}

/// Render the first `limit` rows as a fixed-width table.
pub fn render_preview(rows: &[ReportRow], limit: usize) -> String {
    let cells: Vec<[String; 8]> = rows.iter().take(limit).map(ReportRow::cells).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, HEADERS.iter().copied(), &widths);
    for row in &cells {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 8]) {
    let line: Vec<String> = cells
        .zip(widths)
        .zip(RIGHT_ALIGNED)
        .map(|((cell, &width), right)| {
            if right {
                format!("{cell:>width$}")
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
