//! ページング用のデータ構造

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::TopRaceItem;

/// トップページのスクロール1回分の件数
pub const DEFAULT_PAGE_SIZE: u64 = 10;
const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct PaginationParams {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl PaginationParams {
    pub fn new(page: Option<u64>, per_page: Option<u64>) -> Self {
        Self { page, per_page }
    }

    pub fn get_page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn get_per_page(&self) -> u64 {
        self.per_page
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    pub fn get_offset(&self) -> u64 {
        (self.get_page() - 1).saturating_mul(self.get_per_page())
    }

    pub fn get_limit(&self) -> u64 {
        self.get_per_page()
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[aliases(TopRacePage = PaginatedResponse<TopRaceItem>)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, params: &PaginationParams, total: u64) -> Self {
        let page = params.get_page();
        let per_page = params.get_per_page();
        let total_pages = total.div_ceil(per_page).max(1);
        Self {
            items,
            page,
            per_page,
            total,
            total_pages,
            has_more: page.saturating_mul(per_page) < total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_params() {
        let params = PaginationParams::new(Some(2), Some(10));
        assert_eq!(params.get_page(), 2);
        assert_eq!(params.get_per_page(), 10);
        assert_eq!(params.get_offset(), 10);
        assert_eq!(params.get_limit(), 10);
    }

    #[test]
    fn test_pagination_params_defaults() {
        let params = PaginationParams::new(None, None);
        assert_eq!(params.get_page(), 1);
        assert_eq!(params.get_per_page(), DEFAULT_PAGE_SIZE);
        assert_eq!(params.get_offset(), 0);
    }

    #[test]
    fn test_pagination_params_clamped() {
        let params = PaginationParams::new(Some(0), Some(1000));
        assert_eq!(params.get_page(), 1);
        assert_eq!(params.get_per_page(), 100);
    }

    #[test]
    fn test_huge_page_saturates() {
        let params = PaginationParams::new(Some(u64::MAX), Some(100));
        assert_eq!(params.get_offset(), u64::MAX);

        let page: PaginatedResponse<i32> = PaginatedResponse::new(vec![], &params, 25);
        assert_eq!(page.page, u64::MAX);
        assert!(!page.has_more);
    }

    #[test]
    fn test_paginated_response() {
        let params = PaginationParams::new(Some(2), Some(10));
        let page = PaginatedResponse::new(vec![1, 2, 3], &params, 25);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_more);

        let last = PaginatedResponse::new(vec![1], &PaginationParams::new(Some(3), Some(10)), 25);
        assert!(!last.has_more);

        let empty: PaginatedResponse<i32> = PaginatedResponse::new(vec![], &params, 0);
        assert_eq!(empty.total_pages, 1);
        assert!(!empty.has_more);
    }
}
