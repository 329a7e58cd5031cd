use serde::{Deserialize, Serialize};

/// Pagination metadata computed for a single list query
///
/// `current_page` echoes the requested `page` value, which the list
/// operation uses as a raw row offset rather than a page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total_element: i64,
    pub current_page: i64,
    pub total_pages: i64,
}

impl Pagination {
    /// Builds pagination for `total_element` rows split into pages of `page_size`
    ///
    /// A non-positive `page_size` means the listing was unbounded, so every
    /// row fits on a single page.
    ///
    /// # Example
    /// ```
    /// use employee_api::domain::employee::Pagination;
    ///
    /// let pg = Pagination::new(25, -1, 10);
    /// assert_eq!(pg.total_pages, 3);
    /// ```
    pub fn new(total_element: i64, current_page: i64, page_size: i64) -> Self {
        let total_pages = if page_size > 0 {
            total_element / page_size + i64::from(total_element % page_size != 0)
        } else if total_element > 0 {
            1
        } else {
            0
        };

        Self {
            total_element,
            current_page,
            total_pages,
        }
    }
}
