//! Sorting and pagination state shared by every table page

use std::cmp::Ordering;

/// Page sizes offered by the page-size selector
pub const PAGE_SIZES: [usize; 3] = [10, 25, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Header marker: `↑`, `↓`
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// Table view state over columns of type `C`
///
/// Rows flow through filter (done by the page), then sort, then the page
/// slice. At most one column is sorted at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState<C> {
    sort: Option<(C, SortDirection)>,
    page_index: usize,
    page_size: usize,
}

impl<C> Default for TableState<C> {
    fn default() -> Self {
        Self {
            sort: None,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl<C: Copy + PartialEq> TableState<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(&self) -> Option<(C, SortDirection)> {
        self.sort
    }

    /// Direction `column` is sorted in, if it is the sorted column
    pub fn sort_direction(&self, column: C) -> Option<SortDirection> {
        match self.sort {
            Some((sorted, direction)) if sorted == column => Some(direction),
            _ => None,
        }
    }

    /// Cycles `column` through ascending, descending and unsorted
    ///
    /// Toggling a different column starts it at ascending.
    pub fn toggle_sort(&mut self, column: C) {
        self.sort = match self.sort_direction(column) {
            None => Some((column, SortDirection::Asc)),
            Some(SortDirection::Asc) => Some((column, SortDirection::Desc)),
            Some(SortDirection::Desc) => None,
        };
    }

    pub fn set_sort(&mut self, sort: Option<(C, SortDirection)>) {
        self.sort = sort;
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Changes the page size and returns to the first page
    pub fn set_page_size(&mut self, size: usize) -> Result<(), String> {
        if !PAGE_SIZES.contains(&size) {
            return Err(format!("Page size must be one of 10, 25 or 50, got {}", size));
        }
        self.page_size = size;
        self.page_index = 0;
        Ok(())
    }

    /// Called whenever a filter changes
    pub fn reset_page(&mut self) {
        self.page_index = 0;
    }

    /// Number of pages for `total` rows; zero when there are none
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, total: usize) -> bool {
        self.page_index + 1 < self.page_count(total)
    }

    pub fn next_page(&mut self, total: usize) {
        if self.can_next(total) {
            self.page_index += 1;
        }
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// Jumps to `index`, clamped to the last page
    pub fn set_page(&mut self, index: usize, total: usize) {
        let last = self.page_count(total).saturating_sub(1);
        self.page_index = index.min(last);
    }

    /// `Showing X to Y of N <noun>` for the current page
    pub fn summary(&self, total: usize, noun: &str) -> String {
        let (from, to) = if total == 0 {
            (0, 0)
        } else {
            let start = self.page_index * self.page_size;
            (start + 1, (start + self.page_size).min(total))
        };
        format!("Showing {} to {} of {} {}", from, to, total, noun)
    }

    /// Sorts rows by the current sort column
    ///
    /// `compare` orders two rows by the given column in ascending order;
    /// the sort is stable so equal rows keep their incoming order.
    pub fn sorted<T, F>(&self, mut rows: Vec<T>, compare: F) -> Vec<T>
    where
        F: Fn(&T, &T, C) -> Ordering,
    {
        if let Some((column, direction)) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = compare(a, b, column);
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }
        rows
    }

    /// Sorts the filtered rows and returns the current page
    pub fn page<T, F>(&self, rows: Vec<T>, compare: F) -> Vec<T>
    where
        F: Fn(&T, &T, C) -> Ordering,
    {
        self.sorted(rows, compare)
            .into_iter()
            .skip(self.page_index * self.page_size)
            .take(self.page_size)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Column {
        Value,
        Other,
    }

    fn by_value(a: &u32, b: &u32, _: Column) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn sort_cycles_through_three_states() {
        let mut table = TableState::new();
        table.toggle_sort(Column::Value);
        assert_eq!(table.sort(), Some((Column::Value, SortDirection::Asc)));
        table.toggle_sort(Column::Value);
        assert_eq!(table.sort(), Some((Column::Value, SortDirection::Desc)));
        table.toggle_sort(Column::Value);
        assert_eq!(table.sort(), None);
    }

    #[test]
    fn sorting_another_column_starts_ascending() {
        let mut table = TableState::new();
        table.toggle_sort(Column::Value);
        table.toggle_sort(Column::Value);
        table.toggle_sort(Column::Other);
        assert_eq!(table.sort(), Some((Column::Other, SortDirection::Asc)));
        assert_eq!(table.sort_direction(Column::Value), None);
    }

    #[test]
    fn page_sorts_then_slices() {
        let mut table = TableState::new();
        table.toggle_sort(Column::Value);
        table.toggle_sort(Column::Value);

        let rows: Vec<u32> = (1..=25).collect();
        let first = table.page(rows.clone(), by_value);
        assert_eq!(first.len(), 10);
        assert_eq!(first[0], 25);

        table.set_page(2, rows.len());
        let last = table.page(rows, by_value);
        assert_eq!(last, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn unsorted_page_keeps_input_order() {
        let table: TableState<Column> = TableState::new();
        assert_eq!(table.page(vec![3, 1, 2], by_value), vec![3, 1, 2]);
    }

    #[test]
    fn summary_reports_visible_range() {
        let mut table: TableState<Column> = TableState::new();
        assert_eq!(table.summary(23, "tasks"), "Showing 1 to 10 of 23 tasks");
        table.next_page(23);
        table.next_page(23);
        assert_eq!(table.summary(23, "tasks"), "Showing 21 to 23 of 23 tasks");
        assert_eq!(table.summary(0, "tasks"), "Showing 0 to 0 of 0 tasks");
    }

    #[test]
    fn navigation_respects_bounds() {
        let mut table: TableState<Column> = TableState::new();
        assert!(!table.can_previous());
        assert!(table.can_next(11));
        assert!(!table.can_next(10));
        assert_eq!(table.page_count(0), 0);
        assert_eq!(table.page_count(11), 2);

        table.next_page(11);
        table.next_page(11);
        assert_eq!(table.page_index(), 1);

        table.previous_page();
        table.previous_page();
        assert_eq!(table.page_index(), 0);

        table.set_page(9, 11);
        assert_eq!(table.page_index(), 1);
    }

    #[test]
    fn page_size_is_restricted_and_resets_page() {
        let mut table: TableState<Column> = TableState::new();
        table.next_page(30);
        assert!(table.set_page_size(25).is_ok());
        assert_eq!(table.page_index(), 0);
        assert!(table.set_page_size(20).is_err());
        assert_eq!(table.page_size(), 25);
    }
}
