use crate::error::ExportError;
use crate::types::UserInteractionRecord;

/// Header row of the canonical CSV layout. Column order is fixed and matches
/// the JSON field order of [`UserInteractionRecord`].
pub const CSV_HEADER: &str = "user_id,marketing_channel,product_views,add_to_cart,image_quality,review_count,time_spent_on_page,conversion";

/// Render records as CSV: the header row plus one row per record, joined with
/// `\n` and without a trailing newline.
#[must_use]
pub fn render_csv(records: &[UserInteractionRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(records.iter().map(csv_row));
    lines.join("\n")
}

fn csv_row(record: &UserInteractionRecord) -> String {
    format!(
        "{},{},{},{},{},{},{},{}",
        record.user_id,
        record.marketing_channel,
        record.product_views,
        record.add_to_cart,
        record.image_quality,
        record.review_count,
        record.time_spent_on_page,
        record.conversion
    )
}

/// Parse records back out of CSV produced by [`render_csv`].
///
/// Blank lines are skipped, so input with a trailing newline parses cleanly.
///
/// # Errors
///
/// Returns `ExportError` if the header does not match [`CSV_HEADER`] exactly,
/// or if any row has the wrong field count or an unparseable field.
pub fn parse_csv(input: &str) -> Result<Vec<UserInteractionRecord>, ExportError> {
    let mut lines = input.lines();
    let header = lines.next().unwrap_or("");
    if header.trim_end_matches('\r') != CSV_HEADER {
        return Err(ExportError::Header {
            found: header.to_string(),
        });
    }

    let mut records = Vec::new();
    for (offset, raw) in lines.enumerate() {
        // 1-based line number, counting the header.
        let line = offset + 2;
        let row = raw.trim_end_matches('\r');
        if row.is_empty() {
            continue;
        }
        let fields: Vec<&str> = row.split(',').collect();
        if fields.len() != 8 {
            return Err(ExportError::FieldCount {
                line,
                found: fields.len(),
            });
        }
        records.push(UserInteractionRecord {
            user_id: fields[0].to_string(),
            marketing_channel: parse_field(fields[1], line, "marketing_channel")?,
            product_views: parse_field(fields[2], line, "product_views")?,
            add_to_cart: parse_field(fields[3], line, "add_to_cart")?,
            image_quality: parse_field(fields[4], line, "image_quality")?,
            review_count: parse_field(fields[5], line, "review_count")?,
            time_spent_on_page: parse_field(fields[6], line, "time_spent_on_page")?,
            conversion: parse_field(fields[7], line, "conversion")?,
        });
    }

    Ok(records)
}

fn parse_field<T>(raw: &str, line: usize, column: &'static str) -> Result<T, ExportError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ExportError::Field {
        line,
        column,
        reason: e.to_string(),
    })
}

/// Render records as a compact JSON array.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails.
pub fn render_json(records: &[UserInteractionRecord]) -> Result<String, ExportError> {
    Ok(serde_json::to_string(records)?)
}

/// Parse records from a JSON array as produced by [`render_json`].
///
/// # Errors
///
/// Returns [`ExportError::Json`] if the input is not a valid record array.
pub fn parse_json(input: &str) -> Result<Vec<UserInteractionRecord>, ExportError> {
    Ok(serde_json::from_str(input)?)
}
