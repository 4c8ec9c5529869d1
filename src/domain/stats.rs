//! Per-category statistics

use super::book::ContactBook;

/// Percentage points represented by one bar block
pub const PERCENT_PER_BLOCK: usize = 5;

/// Counts for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStat {
    pub category: String,
    pub count: usize,
    /// Share of all contacts, 0.0 to 100.0
    pub percentage: f64,
    /// Number of bar blocks, `floor(percentage / 5)`
    pub bar_len: usize,
}

impl CategoryStat {
    pub fn bar(&self) -> String {
        "█".repeat(self.bar_len)
    }
}

/// Summary of a contact book
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total: usize,
    /// Sorted by category name
    pub categories: Vec<CategoryStat>,
}

impl Statistics {
    pub fn from_book(book: &ContactBook) -> Self {
        let total = book.len();
        let categories = book
            .category_counts()
            .into_iter()
            .map(|(category, count)| CategoryStat {
                category: category.to_string(),
                count,
                percentage: count as f64 / total as f64 * 100.0,
                // Integer form of floor(count / total * 100 / 5)
                bar_len: count * 100 / PERCENT_PER_BLOCK / total,
            })
            .collect();

        Self { total, categories }
    }
}
