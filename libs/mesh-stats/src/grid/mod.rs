//! # Data Grid
//!
//! Column-typed table model behind the stats view: a data source, a search
//! filter and editable toggle cells. Drawing is left to the caller.

use std::fmt;

use crate::error::{StatsError, StatsResult};
use crate::search::{CellValue, SearchQuery};

/// A row type the grid can display.
pub trait GridRow {
    /// Column identifier.
    type Column: Copy + fmt::Debug + 'static;

    /// Columns in display order.
    fn columns() -> &'static [Self::Column];

    /// Value shown in `column`.
    fn cell(&self, column: Self::Column) -> CellValue;

    /// Whether `column` holds an editable toggle.
    fn is_editable(column: Self::Column) -> bool;

    /// Writes a toggle value. Returns true if the value changed.
    ///
    /// Only called for columns where [`is_editable`](Self::is_editable) is true.
    fn set_toggle(&mut self, column: Self::Column, value: bool) -> bool;
}

/// Rows plus the active search.
#[derive(Debug, Clone)]
pub struct DataGrid<T: GridRow> {
    rows: Vec<T>,
    search: String,
    query: Option<SearchQuery>,
}

impl<T: GridRow> DataGrid<T> {
    /// Creates a grid over `rows` with an empty search.
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            search: String::new(),
            query: None,
        }
    }

    /// All rows, unfiltered.
    pub fn data_source(&self) -> &[T] {
        &self.rows
    }

    /// Replaces the rows. The search is kept.
    pub fn set_data_source(&mut self, rows: Vec<T>) {
        self.rows = rows;
    }

    /// Row at `index` in the unfiltered data source.
    pub fn row(&self, index: usize) -> Option<&T> {
        self.rows.get(index)
    }

    /// Raw search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Parsed search, `None` when the search is blank.
    pub fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    /// Sets the search text and reparses it.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.query = SearchQuery::parse(&self.search);
    }

    /// Indices of rows passing the search, in data source order.
    pub fn visible_rows(&self) -> Vec<usize> {
        let Some(query) = &self.query else {
            return (0..self.rows.len()).collect();
        };

        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                T::columns()
                    .iter()
                    .any(|&column| query.matches_cell(&row.cell(column)))
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// Edits a toggle cell. Returns true if the value changed.
    pub fn set_toggle(&mut self, row: usize, column: T::Column, value: bool) -> StatsResult<bool> {
        if !T::is_editable(column) {
            return Err(StatsError::ColumnNotEditable {
                column: format!("{column:?}"),
            });
        }

        let len = self.rows.len();
        let target = self
            .rows
            .get_mut(row)
            .ok_or(StatsError::RowOutOfRange { row, len })?;
        Ok(target.set_toggle(column, value))
    }
}
