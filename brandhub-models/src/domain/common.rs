use serde::{Deserialize, Serialize};

/// Offset/limit window applied to an already materialised list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub records: Vec<T>,
    pub total: usize,
    pub offset: usize,
    pub limit: Option<usize>,
}

impl Page {
    pub fn new(offset: usize, limit: Option<usize>) -> Self {
        Self { offset, limit }
    }

    /// Cut the window out of `items`. An offset past the end yields an empty page.
    pub fn slice<T>(&self, items: Vec<T>) -> PageResult<T> {
        let total = items.len();
        let records = items
            .into_iter()
            .skip(self.offset)
            .take(self.limit.unwrap_or(usize::MAX))
            .collect();
        PageResult {
            records,
            total,
            offset: self.offset,
            limit: self.limit,
        }
    }
}
