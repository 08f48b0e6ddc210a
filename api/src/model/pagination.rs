use kernel::model::list::PageOptions;
use serde::{Deserialize, Serialize};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_NUMBER: u32 = 10;

/// `?page=N&number=M` query applied uniformly to list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub number: Option<u32>,
}

impl ListQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE).max(1)
    }

    pub fn number(&self) -> u32 {
        self.number.unwrap_or(DEFAULT_NUMBER)
    }

    pub fn to_page_options(&self) -> PageOptions {
        let page = self.page();
        let number = self.number();
        PageOptions::new(i64::from(number), i64::from((page - 1) * number))
    }
}

#[derive(Debug, Serialize)]
pub struct Paging {
    pub prev: Option<String>,
    pub next: String,
}

impl Paging {
    /// `prev` is null on the first page; `next` is always emitted, the
    /// client discovers the end by reading an empty page.
    pub fn build(base_path: &str, query: &ListQuery) -> Self {
        let page = query.page();
        let number = query.number();
        let prev = (page > 1).then(|| format!("{base_path}?page={}&number={number}", page - 1));
        let next = format!("{base_path}?page={}&number={number}", page + 1);
        Self { prev, next }
    }
}

/// Envelope for every list endpoint: `{data: [...], paging: {prev, next}}`.
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub paging: Paging,
}

impl<T> PageResponse<T> {
    pub fn new(data: Vec<T>, base_path: &str, query: &ListQuery) -> Self {
        Self {
            data,
            paging: Paging::build(base_path, query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_no_prev_link() {
        let paging = Paging::build("/places/1/books", &ListQuery::default());
        assert_eq!(paging.prev, None);
        assert_eq!(paging.next, "/places/1/books?page=2&number=10");
    }

    #[test]
    fn later_pages_link_both_ways() {
        let query = ListQuery {
            page: Some(3),
            number: Some(5),
        };
        let paging = Paging::build("/amenities", &query);
        assert_eq!(paging.prev.as_deref(), Some("/amenities?page=2&number=5"));
        assert_eq!(paging.next, "/amenities?page=4&number=5");
    }

    #[test]
    fn page_options_window_matches_the_query() {
        let query = ListQuery {
            page: Some(3),
            number: Some(5),
        };
        let options = query.to_page_options();
        assert_eq!(options.limit, 5);
        assert_eq!(options.offset, 10);
    }

    #[test]
    fn page_zero_is_clamped_to_the_first_page() {
        let query = ListQuery {
            page: Some(0),
            number: None,
        };
        assert_eq!(query.to_page_options().offset, 0);
        assert_eq!(Paging::build("/states", &query).prev, None);
    }
}
