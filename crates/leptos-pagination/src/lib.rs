//! Leptos Pagination Utilities
//!
//! Splits an already rendered row sequence into fixed-size pages.
//! Rows stay in the DOM; only their visibility changes.

use std::ops::Range;

use leptos::prelude::*;

/// Class set on rows of the visible page (opacity fade, cosmetic only)
pub const FADE_IN_CLASS: &str = "page-fade-in";

/// Class set on rows outside the visible page
pub const HIDDEN_CLASS: &str = "page-hidden";

/// Number of pages needed for `row_count` rows, i.e. `ceil(row_count / page_size)`.
///
/// A zero page size yields zero pages.
pub fn total_pages(row_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    row_count.div_ceil(page_size)
}

/// Pagination state for one table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    row_count: usize,
    page_size: usize,
    total_pages: usize,
    current_page: usize,
}

/// One clickable page marker in the nav
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMarker {
    /// 0-indexed page reference
    pub index: usize,
    /// 1-indexed display label
    pub label: String,
    pub active: bool,
}

impl Pagination {
    /// Attach pagination to a table holding `row_count` rows.
    ///
    /// Returns `None` when everything fits on a single page (or there are no
    /// rows): no nav is rendered and every row stays visible.
    pub fn attach(row_count: usize, page_size: usize) -> Option<Self> {
        let total = total_pages(row_count, page_size);
        if total <= 1 {
            return None;
        }
        Some(Self {
            row_count,
            page_size,
            total_pages: total,
            current_page: 0,
        })
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Switch to `page`. Indices past the last page are ignored.
    ///
    /// Returns whether the page was accepted.
    pub fn select(&mut self, page: usize) -> bool {
        if page >= self.total_pages {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Half-open row range of the current page
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.current_page * self.page_size;
        let end = (start + self.page_size).min(self.row_count);
        start..end
    }

    pub fn is_visible(&self, row: usize) -> bool {
        self.visible_range().contains(&row)
    }

    pub fn is_active(&self, page: usize) -> bool {
        self.current_page == page
    }

    /// Markers for every page, exactly one of them active
    pub fn markers(&self) -> Vec<PageMarker> {
        (0..self.total_pages)
            .map(|index| PageMarker {
                index,
                label: (index + 1).to_string(),
                active: index == self.current_page,
            })
            .collect()
    }
}

/// Whether `row` is shown given the (optional) table pagination.
///
/// Tables without pagination show every row.
pub fn row_visible(pagination: Option<&Pagination>, row: usize) -> bool {
    pagination.map_or(true, |p| p.is_visible(row))
}

/// Class for `row`: fade-in on the visible page, hidden otherwise
pub fn row_class(pagination: Option<&Pagination>, row: usize) -> &'static str {
    if row_visible(pagination, row) {
        FADE_IN_CLASS
    } else {
        HIDDEN_CLASS
    }
}

/// Create click handler for a page marker
pub fn make_on_marker_click(
    pagination: RwSignal<Option<Pagination>>,
    page: usize,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        pagination.update(|state| {
            if let Some(state) = state {
                state.select(page);
            }
        });
    }
}

/// Page marker nav rendered after a table
///
/// Renders nothing while `pagination` is `None`.
#[component]
pub fn PaginationNav(
    pagination: RwSignal<Option<Pagination>>,
    #[prop(into)] nav_id: String,
) -> impl IntoView {
    // Only rebuild the markers when a different table size gets attached
    let total = Memo::new(move |_| pagination.with(|p| p.as_ref().map(Pagination::total_pages)));

    move || {
        total.get().map(|total| {
            view! {
                <div id=nav_id.clone() class="pagination-nav">
                    "Page: "
                    {(0..total)
                        .map(|page| {
                            view! {
                                <a
                                    href="javascript:void(0)"
                                    rel=page.to_string()
                                    class:active=move || {
                                        pagination.with(|p| p.as_ref().is_some_and(|p| p.is_active(page)))
                                    }
                                    on:click=make_on_marker_click(pagination, page)
                                >
                                    {page + 1}
                                </a>
                                " "
                            }
                        })
                        .collect_view()}
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceil() {
        for page_size in 1..12 {
            for rows in 0..60 {
                let expected = (rows + page_size - 1) / page_size;
                assert_eq!(total_pages(rows, page_size), expected, "rows={rows} size={page_size}");
            }
        }
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_single_page_attaches_nothing() {
        assert!(Pagination::attach(0, 10).is_none());
        assert!(Pagination::attach(1, 10).is_none());
        assert!(Pagination::attach(10, 10).is_none());
        assert!(Pagination::attach(10, 0).is_none());
        assert!(Pagination::attach(11, 10).is_some());
    }

    #[test]
    fn test_first_page_visible_after_attach() {
        let pagination = Pagination::attach(25, 10).unwrap();
        assert_eq!(pagination.current_page(), 0);
        assert_eq!(pagination.visible_range(), 0..10);
        assert!(pagination.markers()[0].active);
    }

    #[test]
    fn test_twenty_five_rows_three_pages() {
        let mut pagination = Pagination::attach(25, 10).unwrap();
        assert_eq!(pagination.total_pages(), 3);

        let labels: Vec<String> = pagination.markers().into_iter().map(|m| m.label).collect();
        assert_eq!(labels, vec!["1", "2", "3"]);

        // Clicking "2" shows rows 10..=19
        assert!(pagination.select(1));
        for row in 0..25 {
            assert_eq!(pagination.is_visible(row), (10..=19).contains(&row), "row {row}");
        }

        // Last page is short
        pagination.select(2);
        assert_eq!(pagination.visible_range(), 20..25);
    }

    #[test]
    fn test_exactly_one_active_marker() {
        let mut pagination = Pagination::attach(47, 5).unwrap();
        for page in 0..pagination.total_pages() {
            pagination.select(page);
            let markers = pagination.markers();
            let active: Vec<usize> = markers.iter().filter(|m| m.active).map(|m| m.index).collect();
            assert_eq!(active, vec![page]);

            let visible: Vec<usize> = (0..47).filter(|r| pagination.is_visible(*r)).collect();
            let expected: Vec<usize> = (page * 5..((page + 1) * 5).min(47)).collect();
            assert_eq!(visible, expected);
        }
    }

    #[test]
    fn test_out_of_range_select_is_ignored() {
        let mut pagination = Pagination::attach(25, 10).unwrap();
        pagination.select(1);
        assert!(!pagination.select(3));
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn test_row_visible_without_pagination() {
        assert!(row_visible(None, 0));
        assert!(row_visible(None, 999));
        let pagination = Pagination::attach(30, 10).unwrap();
        assert!(row_visible(Some(&pagination), 9));
        assert!(!row_visible(Some(&pagination), 10));
        assert_eq!(row_class(Some(&pagination), 10), HIDDEN_CLASS);
        assert_eq!(row_class(None, 10), FADE_IN_CLASS);
    }
}
