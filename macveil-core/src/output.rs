//! Human-readable rendering of command results.

use serde_json::Value;

/// Render a handler result for `--output text`.
///
/// Address changes print as `interface: previous -> current`, listings print
/// one line per entry. Anything else falls back to pretty JSON.
pub fn render_text(message: &str, data: &Value) -> String {
    let mut lines = vec![message.to_string()];
    if let Some(change) = address_change(data) {
        lines.push(change);
        if let (Some(requested), Some(current)) = (text(data, "requested"), text(data, "current")) {
            if requested != current {
                lines.push(format!("  requested {requested}, driver kept {current}"));
            }
        }
    } else if let Some(interfaces) = data["interfaces"].as_array() {
        lines.extend(interfaces.iter().map(interface_line));
    } else if let Some(vendors) = data["vendors"].as_array() {
        lines.extend(vendors.iter().map(vendor_line));
    } else if let Some(ouis) = data["ouis"].as_array() {
        lines.extend(ouis.iter().map(oui_line));
    } else if !data.is_null() {
        lines.push(serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string()));
    }
    lines.join("\n")
}

fn text<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value[key].as_str()
}

fn address_change(data: &Value) -> Option<String> {
    let interface = text(data, "interface")?;
    let previous = text(data, "previous")?;
    let current = text(data, "current")?;
    Some(format!("{interface}: {previous} -> {current}"))
}

fn interface_line(entry: &Value) -> String {
    let state = if entry["up"].as_bool().unwrap_or(false) {
        "up"
    } else {
        "down"
    };
    let permanent = match text(entry, "permanent") {
        Some(permanent) if entry["changed"].as_bool() == Some(true) => {
            format!(" (permanent {permanent})")
        }
        Some(_) => String::new(),
        None => " (permanent unknown)".to_string(),
    };
    format!(
        "  {:<16} {} {}{}",
        text(entry, "name").unwrap_or("?"),
        text(entry, "current").unwrap_or("?"),
        state,
        permanent
    )
}

fn joined(value: &Value) -> String {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}

fn vendor_line(vendor: &Value) -> String {
    format!(
        "  {} [{}] {}",
        text(vendor, "name").unwrap_or("?"),
        joined(&vendor["device_types"]),
        joined(&vendor["ouis"])
    )
}

fn oui_line(record: &Value) -> String {
    format!(
        "  {} {} [{}]",
        text(record, "oui").unwrap_or("?"),
        text(record, "vendor").unwrap_or("?"),
        joined(&record["device_types"])
    )
}
