use std::fmt::Display;
use comfy_table::{presets::NOTHING, Cell, CellAlignment, Table};
use crate::{sort_throws, total, Error, ParsedArgs, RandomSource, Roller, Throw};


/// The sorted outcomes of a run, one row per expression, ready to print.
///
/// Formatting a report lays every row out in right-aligned columns so that
/// the per-row totals, and the grand total below them, line up vertically:
///
/// ```text
///  d6(  4 )                          =  4
/// d20( 17 ) + d20( 3 ) + d6( 5 ) - 2 = 23
///                                    = 27
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    rows: Vec<Vec<Throw>>,
    column_count: usize,
}

impl Report {
    /// Creates an empty report whose rows are padded to `column_count` outcomes.
    pub fn new(column_count: usize) -> Self {
        Self { rows: Vec::new(), column_count }
    }

    /// Rolls every parsed group in input order and collects the sorted results.
    ///
    /// # Errors
    /// Returns the first random source failure. Nothing is kept from a run
    /// that failed part way through.
    pub fn roll<R: RandomSource>(parsed: &ParsedArgs, roller: &mut Roller<R>) -> Result<Self, Error> {
        let mut report = Self::new(parsed.column_count);

        for group in &parsed.groups {
            report.push(roller.roll(group)?);
        }

        Ok(report)
    }

    /// Adds a row, sorting it for display.
    pub fn push(&mut self, mut throws: Vec<Throw>) {
        sort_throws(&mut throws);
        self.rows.push(throws);
    }

    /// The sorted rows, in input order.
    pub fn rows(&self) -> &[Vec<Throw>] {
        &self.rows
    }

    /// Whether there is nothing to print.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total of every row, in row order.
    pub fn totals(&self) -> Vec<i64> {
        self.rows.iter().map(|row| total(row)).collect()
    }

    /// Sum of all rows, only reported when there is more than one row.
    ///
    /// Like the row totals it saturates at the `i64` bounds.
    pub fn grand_total(&self) -> Option<i64> {
        match self.rows.len() {
            0 | 1 => None,
            _ => Some(self.totals().into_iter().fold(0, i64::saturating_add)),
        }
    }

    /// Lays out one row as cells: two per outcome, an operator cell between
    /// outcomes and, when totals are shown, padding plus `=` and the total.
    fn row_cells(&self, throws: &[Throw]) -> Vec<String> {
        let mut cells = Vec::with_capacity(self.column_count * 3 + 1);

        for (i, throw) in throws.iter().enumerate() {
            let negative = throw.number < 0;

            if i > 0 {
                cells.push(if negative { " - " } else { " + " }.to_string());
            }

            if throw.kind.is_constant() {
                cells.push(String::new());
                cells.push(match i {
                    0 => throw.number.to_string(),
                    _ => throw.number.unsigned_abs().to_string(),
                });
            } else {
                cells.push(format!("{}( ", throw.kind));
                cells.push(format!("{} )", throw.display_value()));
            }
        }

        if self.rows.len() > 1 || throws.len() > 1 {
            let missing = self.column_count.saturating_sub(throws.len());
            cells.resize(cells.len() + missing * 3, String::new());
            cells.push(" = ".into());
            cells.push(total(throws).to_string());
        }

        cells
    }

    fn grand_total_cells(&self, grand_total: i64) -> Vec<String> {
        let mut cells = vec![String::new(); (self.column_count * 3).saturating_sub(1)];
        cells.push("= ".into());
        cells.push(grand_total.to_string());
        cells
    }

    fn table(&self) -> Table {
        let mut rows: Vec<Vec<String>> = self.rows.iter()
            .map(|throws| self.row_cells(throws))
            .collect();

        if let Some(grand_total) = self.grand_total() {
            rows.push(self.grand_total_cells(grand_total));
        }

        let mut table = Table::new();
        table.load_preset(NOTHING);

        for row in without_blank_columns(rows) {
            table.add_row(row.into_iter().map(Cell::new));
        }

        for column in table.column_iter_mut() {
            column.set_padding((0, 0));
            column.set_cell_alignment(CellAlignment::Right);
        }

        table
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        write!(f, "{}", self.table())
    }
}


/// Drops the columns that are empty in every row; they would have no width.
fn without_blank_columns(rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);

    let used: Vec<bool> = (0..width)
        .map(|column| rows.iter().any(|row| row.get(column).is_some_and(|cell| !cell.is_empty())))
        .collect();

    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .zip(&used)
                .filter_map(|(cell, &used)| used.then_some(cell))
                .collect()
        })
        .collect()
}
