//! Tabular flattening of responses: header `Respondent, Date` plus one
//! column per field in form order, one data row per response.

use serde_json::Value;

use crate::models::form::{FieldKind, FieldSchema, Form};

use super::types::Response;

/// Render responses as CSV text. Rows are LF-joined; cells carry standard
/// CSV quoting, so embedded commas, quotes, and newlines survive a
/// round-trip through a spreadsheet.
pub fn export_csv(form: &Form, responses: &[Response]) -> String {
    let mut rows = Vec::with_capacity(responses.len() + 1);

    let mut header = vec!["Respondent".to_string(), "Date".to_string()];
    header.extend(form.fields.iter().map(|f| f.label.clone()));
    rows.push(join_row(&header));

    for response in responses {
        let mut row = Vec::with_capacity(form.fields.len() + 2);
        row.push(
            response
                .respondent_email
                .clone()
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| "Anonymous".to_string()),
        );
        row.push(response.submitted_at.format("%Y-%m-%d").to_string());
        for field in &form.fields {
            row.push(cell_value(field, response));
        }
        rows.push(join_row(&row));
    }

    rows.join("\n")
}

fn join_row(cells: &[String]) -> String {
    cells.iter().map(|c| csv_escape(c)).collect::<Vec<_>>().join(",")
}

/// Quote a cell when it contains a delimiter, a quote, or a line break;
/// embedded quotes double per RFC 4180.
fn csv_escape(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Plain-string form of one answer: booleans as Yes/No, file fields as the
/// uploaded file name, absent answers as the empty string.
fn cell_value(field: &FieldSchema, response: &Response) -> String {
    if field.kind == FieldKind::File {
        return response
            .file_uploads
            .iter()
            .find(|u| u.field_id == field.id)
            .map(|u| u.file_name.clone())
            .unwrap_or_default();
    }

    match response.responses.get(&field.id) {
        None | Some(Value::Null) => String::new(),
        Some(Value::Bool(b)) => if *b { "Yes" } else { "No" }.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(plain_string)
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

fn plain_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
