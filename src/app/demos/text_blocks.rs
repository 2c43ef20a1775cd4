use crate::app::demos::sample_order;
use crate::domain::model::Order;
use crate::utils::error::{Result, ShowcaseError};
use std::io::Write;

/// String fields are spliced in as serde_json literals, quotes included.
pub fn order_json(order: &Order) -> Result<String> {
    Ok(format!(
        r#"{{
  "id": {},
  "placed_on": {},
  "item_count": {},
  "total": {:.2}
}}"#,
        serde_json::to_string(order.id())?,
        serde_json::to_string(&order.placed_on())?,
        order.item_count(),
        order.total()
    ))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn order_html(order: &Order) -> String {
    let rows = order
        .items()
        .iter()
        .map(|item| {
            format!(
                "    <tr><td>{}</td><td>{}</td><td>{:.2}</td></tr>",
                escape_html(item.sku()),
                item.quantity(),
                item.subtotal()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"<table id="{}">
  <tbody>
{}
  </tbody>
</table>"#,
        escape_html(order.id()),
        rows
    )
}

pub fn order_sql(order: &Order) -> String {
    format!(
        r#"SELECT sku, quantity, unit_price
FROM line_items
WHERE order_id = '{}'
ORDER BY sku;"#,
        order.id().replace('\'', "''")
    )
}

/// Checks that the hand-written JSON agrees with the serde rendering on the
/// fields both contain.
pub fn json_matches_serde(order: &Order) -> Result<bool> {
    let block: serde_json::Value = serde_json::from_str(&order_json(order)?)?;
    let derived = serde_json::to_value(order)?;
    let total = block["total"]
        .as_f64()
        .ok_or_else(|| ShowcaseError::invalid("total", "JSON block has no numeric total"))?;
    Ok(block["id"] == derived["id"]
        && block["placed_on"] == derived["placed_on"]
        && (total - order.total()).abs() < 0.005)
}

pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let order = sample_order()?;
    writeln!(out, "{}", order_json(&order)?)?;
    writeln!(out, "json agrees with serde: {}", json_matches_serde(&order)?)?;
    writeln!(out, "{}", order_html(&order))?;
    writeln!(out, "{}", order_sql(&order))?;
    Ok(())
}
