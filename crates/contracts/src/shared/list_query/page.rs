use serde::{Deserialize, Serialize};

/// Page request (page numbers start at 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page_number: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    pub fn first(page_size: usize) -> Self {
        Self::new(1, page_size)
    }

    /// Index of the first item on this page within the full sequence
    pub fn offset(&self) -> usize {
        self.page_number.saturating_sub(1).saturating_mul(self.page_size)
    }
}

/// One page of a filtered and sorted list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_matching: usize,
    pub total_pages: usize,
    pub page_number: usize,
}

impl<T> PageResult<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1 && self.total_pages > 0
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            total_matching: self.total_matching,
            total_pages: self.total_pages,
            page_number: self.page_number,
        }
    }
}
