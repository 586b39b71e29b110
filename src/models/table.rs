use std::fmt;

/// A single cell. `None` marks a missing value (empty or an NA token).
pub type Cell = Option<String>;

/// Cell text that a sheet export uses to mean "no value".
pub const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Interpret raw cell text, mapping missing-value tokens to `None`.
pub fn parse_cell(raw: &str) -> Cell {
    if MISSING_TOKENS.contains(&raw) {
        None
    } else {
        Some(raw.to_string())
    }
}

/// One data row and the sheet line it came from (the header is line 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: u64,
    pub cells: Vec<Cell>,
}

impl Row {
    /// Value at `index`, treating cells past the end as missing.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|c| c.as_deref())
    }

    /// True when no cell in the row holds a value.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

/// Rows × named columns, as read from one sheet tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column names as the sheet spells them.
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// Build a table from literal text, applying the same missing-value rule
    /// as the CSV reader. Rows are numbered as if line 1 were the header.
    pub fn from_literal(headers: &[&str], rows: &[&[&str]]) -> Self {
        let width = headers.len();
        let rows = rows
            .iter()
            .enumerate()
            .map(|(i, cells)| {
                let mut cells: Vec<Cell> = cells.iter().map(|c| parse_cell(c)).collect();
                cells.resize(width.max(cells.len()), None);
                Row {
                    line: i as u64 + 2,
                    cells,
                }
            })
            .collect();

        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Console rendering showing at most `max_rows` rows (head and tail).
    pub fn preview(&self, max_rows: usize) -> TablePreview<'_> {
        TablePreview {
            table: self,
            max_rows,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.preview(DEFAULT_PREVIEW_ROWS), f)
    }
}

pub const DEFAULT_PREVIEW_ROWS: usize = 10;
const MAX_CELL_WIDTH: usize = 30;

/// Borrowed view that renders a table the way a dataframe prints.
pub struct TablePreview<'a> {
    table: &'a Table,
    max_rows: usize,
}

impl TablePreview<'_> {
    fn shown_rows(&self) -> (Vec<(usize, &Row)>, bool) {
        let rows = &self.table.rows;
        if rows.len() <= self.max_rows {
            return (rows.iter().enumerate().collect(), false);
        }
        let head = self.max_rows.div_ceil(2);
        let tail = self.max_rows / 2;
        let shown = rows
            .iter()
            .enumerate()
            .take(head)
            .chain(rows.iter().enumerate().skip(rows.len() - tail))
            .collect();
        (shown, true)
    }
}

fn display_cell(cell: Option<&str>) -> String {
    let text = match cell {
        Some(s) => s.replace('\n', "\\n").replace('\r', "\\r"),
        None => "NaN".to_string(),
    };
    if text.chars().count() > MAX_CELL_WIDTH {
        let cut: String = text.chars().take(MAX_CELL_WIDTH - 3).collect();
        format!("{cut}...")
    } else {
        text
    }
}

impl fmt::Display for TablePreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table;
        let (shown, truncated) = self.shown_rows();

        let headers: Vec<String> = table.headers.iter().map(|h| display_cell(Some(h.as_str()))).collect();
        let body: Vec<(String, Vec<String>)> = shown
            .iter()
            .map(|(i, row)| {
                let cells = (0..table.width()).map(|c| display_cell(row.get(c))).collect();
                (i.to_string(), cells)
            })
            .collect();

        let index_width = body.iter().map(|(i, _)| i.len()).max().unwrap_or(0).max(3);
        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(c, h)| {
                body.iter()
                    .map(|(_, cells)| cells[c].chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:index_width$}", "")?;
        for (h, w) in headers.iter().zip(widths.iter().copied()) {
            write!(f, "  {h:<w$}")?;
        }
        writeln!(f)?;

        let split_at = self.max_rows.div_ceil(2);
        for (n, (index, cells)) in body.iter().enumerate() {
            if truncated && n == split_at {
                writeln!(f, "{:<index_width$}", "...")?;
            }
            write!(f, "{index:<index_width$}")?;
            for (cell, w) in cells.iter().zip(widths.iter().copied()) {
                write!(f, "  {cell:<w$}")?;
            }
            writeln!(f)?;
        }

        write!(f, "\n[{} rows x {} columns]", table.len(), table.width())
    }
}
