//! Grid pagination
//!
//! Maps linear item indices onto (page, row, column) slots. Two modes:
//!
//! - **Row-major** (no `rows_per_page`): a single page, rows filled left to
//!   right in source order, the last row padded up to a multiple of `columns`.
//! - **Paged column-major** (`rows_per_page` set): pages of exactly
//!   `rows_per_page * columns` slots, each filled top to bottom, column by
//!   column. The last page is padded to a full grid.

use crate::errors::ConfigError;

/// One slot of the grid. `index` is `None` for padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub page: usize,
    pub row: usize,
    pub column: usize,
    pub index: Option<usize>,
}

impl Slot {
    pub fn is_padding(&self) -> bool {
        self.index.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    columns: usize,
    rows_per_page: Option<usize>,
}

impl GridLayout {
    pub fn new(columns: usize, rows_per_page: Option<usize>) -> Result<Self, ConfigError> {
        if columns == 0 {
            return Err(ConfigError::InvalidColumns(columns));
        }
        if let Some(0) = rows_per_page {
            return Err(ConfigError::InvalidRowsPerPage(0));
        }
        Ok(Self {
            columns,
            rows_per_page,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows_per_page(&self) -> Option<usize> {
        self.rows_per_page
    }

    fn page_capacity(&self, rows: usize) -> usize {
        rows * self.columns
    }

    pub fn page_count(&self, total: usize) -> usize {
        if total == 0 {
            return 0;
        }
        match self.rows_per_page {
            None => 1,
            Some(rows) => total.div_ceil(self.page_capacity(rows)),
        }
    }

    /// Number of emitted slots, padding included
    pub fn slot_count(&self, total: usize) -> usize {
        match self.rows_per_page {
            None => total.div_ceil(self.columns) * self.columns,
            Some(rows) => self.page_count(total) * self.page_capacity(rows),
        }
    }

    /// Where the item with linear index `index` lands
    pub fn place(&self, index: usize) -> Slot {
        match self.rows_per_page {
            None => Slot {
                page: 0,
                row: index / self.columns,
                column: index % self.columns,
                index: Some(index),
            },
            Some(rows) => {
                let capacity = self.page_capacity(rows);
                let offset = index % capacity;
                Slot {
                    page: index / capacity,
                    row: offset % rows,
                    column: offset / rows,
                    index: Some(index),
                }
            }
        }
    }

    /// All slots in emission order: page by page, row by row, left to right.
    pub fn slots(&self, total: usize) -> Vec<Slot> {
        let count = self.slot_count(total);
        let mut out = Vec::with_capacity(count);
        match self.rows_per_page {
            None => {
                for i in 0..count {
                    out.push(Slot {
                        page: 0,
                        row: i / self.columns,
                        column: i % self.columns,
                        index: (i < total).then_some(i),
                    });
                }
            }
            Some(rows) => {
                let capacity = self.page_capacity(rows);
                for page in 0..self.page_count(total) {
                    for row in 0..rows {
                        for column in 0..self.columns {
                            let global = page * capacity + column * rows + row;
                            out.push(Slot {
                                page,
                                row,
                                column,
                                index: (global < total).then_some(global),
                            });
                        }
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(slots: &[Slot]) -> Vec<Option<usize>> {
        slots.iter().map(|s| s.index).collect()
    }

    #[test]
    fn test_rejects_zero_columns() {
        assert_eq!(GridLayout::new(0, None), Err(ConfigError::InvalidColumns(0)));
        assert_eq!(GridLayout::new(3, Some(0)), Err(ConfigError::InvalidRowsPerPage(0)));
    }

    #[test]
    fn test_row_major_exact_multiple_has_no_padding() {
        let layout = GridLayout::new(4, None).unwrap();
        let slots = layout.slots(8);
        assert_eq!(slots.len(), 8);
        assert!(slots.iter().all(|s| !s.is_padding()));
    }

    #[test]
    fn test_empty_input() {
        let layout = GridLayout::new(4, None).unwrap();
        assert!(layout.slots(0).is_empty());
        assert_eq!(layout.page_count(0), 0);

        let paged = GridLayout::new(4, Some(3)).unwrap();
        assert!(paged.slots(0).is_empty());
        assert_eq!(paged.page_count(0), 0);
    }

    #[test]
    fn test_place_matches_slots() {
        let layout = GridLayout::new(3, Some(2)).unwrap();
        for slot in layout.slots(14).into_iter().filter(|s| !s.is_padding()) {
            assert_eq!(layout.place(slot.index.unwrap()), slot);
        }
        let row_major = GridLayout::new(3, None).unwrap();
        for slot in row_major.slots(7).into_iter().filter(|s| !s.is_padding()) {
            assert_eq!(row_major.place(slot.index.unwrap()), slot);
        }
    }

    #[test]
    fn test_under_full_last_page_is_padded() {
        let layout = GridLayout::new(2, Some(3)).unwrap();
        let slots = layout.slots(7);
        assert_eq!(layout.page_count(7), 2);
        assert_eq!(slots.len(), 12);
        assert_eq!(
            indices(&slots[6..]),
            vec![Some(6), None, None, None, None, None]
        );
    }
}
