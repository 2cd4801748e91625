use serde_json::Value;
use std::io;

use super::format_scalar;

/// Write output as CSV to stdout. A result carrying a schedule emits the
/// schedule rows (one line per month or year); anything else degrades to
/// two-column field/value records.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result {
        Value::Object(map) => {
            if let Some(rows) = first_schedule(map) {
                write_rows(&mut wtr, rows);
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    if !val.is_array() && !val.is_object() {
                        let _ = wtr.write_record([key.as_str(), &format_scalar(val)]);
                    }
                }
            }
        }
        Value::Array(rows) => write_rows(&mut wtr, rows),
        _ => {
            let _ = wtr.write_record([&format_scalar(result)]);
        }
    }

    let _ = wtr.flush();
}

/// The breakdown array of an EMI or FD result, if present.
fn first_schedule(map: &serde_json::Map<String, Value>) -> Option<&Vec<Value>> {
    map.iter().find_map(|(key, val)| match val {
        Value::Array(rows) if key.ends_with("_breakdown") && !rows.is_empty() => Some(rows),
        _ => None,
    })
}

fn write_rows(wtr: &mut csv::Writer<io::StdoutLock<'_>>, rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        for row in rows {
            let _ = wtr.write_record([&format_scalar(row)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);

    for row in rows {
        if let Value::Object(fields) = row {
            let record: Vec<String> = headers
                .iter()
                .map(|h| fields.get(*h).map(format_scalar).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&record);
        }
    }
}
