//! Single-record detail selection
//!
//! A table hands the activated row to a [`DetailSink`]; it knows nothing
//! about the panel that ends up showing the record.

use std::sync::Arc;

/// Receiver of table row activations.
pub trait DetailSink<R> {
    /// Surface `record` in the detail panel.
    fn on_select(&mut self, record: Arc<R>);

    /// Dismiss the detail panel.
    fn on_close(&mut self);
}

/// Holds the one record whose detail panel is open.
///
/// The panel is open exactly when a record is held, so an open panel with no
/// record is unrepresentable. Selecting a new record replaces the previous
/// one in a single step.
#[derive(Debug)]
pub struct DetailSelector<R> {
    selected: Option<Arc<R>>,
}

impl<R> Default for DetailSelector<R> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<R> DetailSelector<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&R> {
        self.selected.as_deref()
    }

    /// Shared handle to the selected record
    pub fn selected_arc(&self) -> Option<&Arc<R>> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

impl<R> DetailSink<R> for DetailSelector<R> {
    fn on_select(&mut self, record: Arc<R>) {
        self.selected = Some(record);
    }

    fn on_close(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row(&'static str);

    #[test]
    fn test_starts_closed() {
        let selector: DetailSelector<Row> = DetailSelector::new();
        assert!(!selector.is_open());
        assert!(selector.selected().is_none());
    }

    #[test]
    fn test_select_then_close() {
        let mut selector = DetailSelector::new();
        selector.on_select(Arc::new(Row("LN002")));
        assert!(selector.is_open());
        assert_eq!(selector.selected(), Some(&Row("LN002")));

        selector.on_close();
        assert!(!selector.is_open());
        assert!(selector.selected().is_none());
    }

    #[test]
    fn test_new_selection_replaces_previous() {
        let mut selector = DetailSelector::new();
        selector.on_select(Arc::new(Row("A")));
        selector.on_select(Arc::new(Row("B")));
        assert_eq!(selector.selected(), Some(&Row("B")));
    }

    #[test]
    fn test_selection_shares_the_record() {
        let record = Arc::new(Row("LN001"));
        let mut selector = DetailSelector::new();
        selector.on_select(Arc::clone(&record));

        let held = selector.selected_arc().unwrap();
        assert!(Arc::ptr_eq(held, &record));
    }
}
