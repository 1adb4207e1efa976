use anyhow::Result;
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;
use watchlist_models::ExportRow;

const CSV_HEADERS: [&str; 4] = ["Title", "Year", "Rating", "Added Date"];

/// Write export rows as CSV with every field quoted. Embedded quotes are
/// escaped by doubling, per RFC 4180.
pub fn write_csv<W: Write>(rows: &[ExportRow], writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    wtr.write_record(CSV_HEADERS)?;
    for row in rows {
        let rating = format!("{:.1}", row.rating);
        wtr.write_record([row.title.as_str(), row.year.as_str(), rating.as_str(), row.added.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn csv_string(rows: &[ExportRow]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(rows, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}
