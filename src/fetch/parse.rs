use std::collections::HashSet;
use std::io::Read;

use csv::ReaderBuilder;

use crate::error::FetchError;
use crate::models::{parse_cell, Cell, Row, Table};

/// Parse CSV text whose first row is the header row.
///
/// `origin` (a URL or path) only labels errors.
pub fn parse_csv(origin: &str, body: &str) -> Result<Table, FetchError> {
    parse_csv_bytes(origin, body.as_bytes())
}

/// Like [`parse_csv`] for a raw download. Bytes that are not UTF-8 fail
/// with [`FetchError::Csv`].
pub fn parse_csv_bytes(origin: &str, body: &[u8]) -> Result<Table, FetchError> {
    let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);
    read_table(origin, body)
}

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Like [`parse_csv`], reading from any byte source.
pub fn read_table<R: Read>(origin: &str, reader: R) -> Result<Table, FetchError> {
    let csv_err = |source| FetchError::Csv {
        origin: origin.to_string(),
        source,
    };

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let raw_headers: Vec<String> = rdr
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(str::to_string)
        .collect();
    if raw_headers.is_empty() {
        return Err(FetchError::NoHeader {
            origin: origin.to_string(),
        });
    }
    let headers = dedupe_headers(&raw_headers);
    let width = headers.len();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(csv_err)?;
        let line = record.position().map_or(0, |p| p.line());
        if record.len() > width {
            return Err(FetchError::TooManyFields {
                origin: origin.to_string(),
                line,
                expected: width,
                found: record.len(),
            });
        }

        let mut cells: Vec<Cell> = record.iter().map(parse_cell).collect();
        cells.resize(width, None);
        rows.push(Row { line, cells });
    }

    Ok(Table::new(headers, rows))
}

/// Name empty headers `Unnamed: <index>` and suffix repeats with `.1`, `.2`, ...
fn dedupe_headers(raw: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut out = Vec::with_capacity(raw.len());

    for (i, header) in raw.iter().enumerate() {
        let base = if header.is_empty() {
            format!("Unnamed: {i}")
        } else {
            header.clone()
        };

        let mut name = base.clone();
        let mut n = 1;
        while seen.contains(&name) {
            name = format!("{base}.{n}");
            n += 1;
        }
        seen.insert(name.clone());
        out.push(name);
    }
    out
}
