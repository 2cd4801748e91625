use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::format_scalar;

/// Format the computation envelope as tables: a field/value summary first,
/// then each schedule (monthly or yearly breakdown) as its own table.
pub fn print_table(value: &Value) {
    let Some(map) = value.as_object() else {
        println!("{}", value);
        return;
    };

    let Some(result) = map.get("result").and_then(Value::as_object) else {
        print_fields(map);
        return;
    };

    // Summary: every scalar field of the result. Nested objects (the two
    // loans of a balance-transfer comparison) flatten to their own scalars.
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in result {
        match val {
            Value::Array(_) => {}
            Value::Object(inner) => {
                for (inner_key, inner_val) in inner {
                    if !inner_val.is_array() {
                        builder.push_record([
                            format!("{key}.{inner_key}"),
                            format_scalar(inner_val),
                        ]);
                    }
                }
            }
            _ => {
                builder.push_record([key.clone(), format_scalar(val)]);
            }
        }
    }
    println!("{}", Table::from(builder));

    // Schedules: top-level breakdowns, plus the per-loan ones nested inside
    // a balance-transfer comparison.
    for (key, val) in result {
        match val {
            Value::Array(rows) => print_schedule(key, rows),
            Value::Object(inner) => {
                for (inner_key, inner_val) in inner {
                    if let Value::Array(rows) = inner_val {
                        print_schedule(&format!("{key}.{inner_key}"), rows);
                    }
                }
            }
            _ => {}
        }
    }

    if let Some(Value::Array(warnings)) = map.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = map.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_fields(map: &serde_json::Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), &format_scalar(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_schedule(name: &str, rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);

    for row in rows {
        if let Value::Object(fields) = row {
            let record: Vec<String> = headers
                .iter()
                .map(|h| fields.get(h.as_str()).map(format_scalar).unwrap_or_default())
                .collect();
            builder.push_record(record);
        }
    }

    println!("\n{}:", name);
    println!("{}", Table::from(builder));
}
