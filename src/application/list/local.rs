use crate::shared::{slice, PaginationState};

type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Client-side paginated list over an already fetched collection.
///
/// The pagination total always equals the number of items passing the
/// active filter.
pub struct LocalList<T> {
    items: Vec<T>,
    filter: Option<Filter<T>>,
    matching: Vec<usize>,
    state: PaginationState,
}

impl<T> LocalList<T> {
    pub fn new(state: PaginationState) -> Self {
        let mut list = Self {
            items: Vec::new(),
            filter: None,
            matching: Vec::new(),
            state,
        };
        list.recompute();
        list
    }

    pub fn with_items(state: PaginationState, items: Vec<T>) -> Self {
        let mut list = Self::new(state);
        list.replace_items(items);
        list
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Swap in a freshly loaded collection, keeping the filter and clamping
    /// the current page if the collection shrank.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.recompute();
    }

    /// Filter the list and jump back to the first page.
    pub fn apply_filter(&mut self, filter: impl Fn(&T) -> bool + Send + Sync + 'static) {
        self.filter = Some(Box::new(filter));
        self.recompute();
        self.state.set_page(1);
    }

    pub fn clear_filter(&mut self) {
        if self.filter.take().is_some() {
            self.recompute();
            self.state.set_page(1);
        }
    }

    /// Number of items passing the filter.
    pub fn len(&self) -> usize {
        self.matching.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matching.is_empty()
    }

    /// Items on the current page.
    pub fn visible(&self) -> Vec<&T> {
        slice(&self.matching, &self.state)
            .iter()
            .map(|&idx| &self.items[idx])
            .collect()
    }

    pub fn summary(&self) -> String {
        self.state.summary()
    }

    pub fn set_page(&mut self, page: u32) {
        self.state.set_page(page);
    }

    pub fn set_page_size(&mut self, size: u32) {
        self.state.set_page_size(size);
    }

    pub fn next_page(&mut self) {
        self.state.next_page();
    }

    pub fn prev_page(&mut self) {
        self.state.prev_page();
    }

    /// Back to the initial page and default size, keeping items and filter.
    pub fn reset(&mut self) {
        self.state.reset();
        self.state.set_total_items(self.matching.len() as u64);
    }

    fn recompute(&mut self) {
        self.matching = match &self.filter {
            Some(filter) => self
                .items
                .iter()
                .enumerate()
                .filter(|(_, item)| filter(*item))
                .map(|(idx, _)| idx)
                .collect(),
            None => (0..self.items.len()).collect(),
        };
        self.state.set_total_items(self.matching.len() as u64);
    }
}
