use crate::ProfileRecord;

/// Column header of the output table.
pub const CSV_HEADER: &str = "username,date_made,num_repos";

/// Render the result table as comma-separated rows: header first, one data
/// row per record in table order, every row newline-terminated.
pub fn render_csv(records: &[ProfileRecord]) -> String {
    let mut buffer = String::new();
    buffer.push_str(CSV_HEADER);
    buffer.push('\n');
    for record in records {
        buffer.push_str(&csv_field(&record.username));
        buffer.push(',');
        buffer.push_str(&csv_field(&record.date_made));
        buffer.push(',');
        buffer.push_str(&record.num_repos.to_string());
        buffer.push('\n');
    }
    buffer
}

// Minimal quoting: only a field containing a delimiter, quote, or line
// break is wrapped, with interior quotes doubled.
fn csv_field(value: &str) -> String {
    if value.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
