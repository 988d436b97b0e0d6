//! # Listing queries
//!
//! A listing request is a query (search text, filters, sort) plus a [`PageCursor`].
//! The query types here turn view state into request parameters; the cursor decides
//! whether those parameters are used at all:
//!
//! - [`PageCursor::First`] requests the collection path with [`ListingQuery::params`].
//! - [`PageCursor::Link`] requests the server-issued link verbatim; the link already
//!   encodes the query it was issued for.
//!
//! Dimensions that are not selected never appear in the parameters, so an absent
//! filter and an explicit "all" produce the same request.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::filters::{FilterOption, ReceiptFlag, ReceiptSort, UserFilter, UserSort, ALL_LABEL};
use crate::models::{Receipt, User};

/// Where in a listing a request points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageCursor {
    #[default]
    First,
    /// Opaque `next` / `previous` link taken from the last page.
    Link(String),
}

/// Request parameters for one kind of listing.
pub trait ListingQuery: Clone + PartialEq {
    type Item: Clone;

    /// Collection path relative to the API base, e.g. `"users/"`.
    const PATH: &'static str;

    /// Query-string pairs for the first page.
    fn params(&self) -> Vec<(&'static str, String)>;

    /// Free-text search term as typed.
    fn search(&self) -> &str;

    fn set_search(&mut self, text: String);
}

/// Query state of the users listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserQuery {
    search: String,
    filters: BTreeMap<UserFilter, FilterOption>,
    sort: UserSort,
}

impl UserQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn with_filter(mut self, filter: UserFilter, label: &str) -> Self {
        self.select(filter, label);
        self
    }

    pub fn with_sort(mut self, sort: UserSort) -> Self {
        self.sort = sort;
        self
    }

    pub fn sort(&self) -> UserSort {
        self.sort
    }

    pub fn set_sort(&mut self, sort: UserSort) {
        self.sort = sort;
    }

    /// Select an option of `filter` by its label.
    ///
    /// "Todas", an empty label, an unknown label or an option without API value all
    /// remove the dimension.
    pub fn select(&mut self, filter: UserFilter, label: &str) {
        match filter.option(label) {
            Some(option) if label != ALL_LABEL && option.value.is_some() => {
                self.filters.insert(filter, option);
            }
            _ => self.clear_filter(filter),
        }
    }

    pub fn clear_filter(&mut self, filter: UserFilter) {
        self.filters.remove(&filter);
    }

    /// Label of the option currently selected for `filter`.
    pub fn selected_label(&self, filter: UserFilter) -> Option<&'static str> {
        self.filters.get(&filter).map(|o| o.label)
    }

    /// Selected dimensions in display order.
    pub fn selected(&self) -> impl Iterator<Item = (UserFilter, FilterOption)> + '_ {
        self.filters.iter().map(|(f, o)| (*f, *o))
    }
}

impl ListingQuery for UserQuery {
    type Item = User;

    const PATH: &'static str = "users/";

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", "1".to_string()),
            ("sort", self.sort.api_key().to_string()),
        ];
        for (filter, option) in &self.filters {
            if let Some(value) = option.value {
                params.push((filter.api_key(), value.to_string()));
            }
        }
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }
        params
    }

    fn search(&self) -> &str {
        &self.search
    }

    fn set_search(&mut self, text: String) {
        self.search = text;
    }
}

/// Query state of the receipts listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiptQuery {
    search: String,
    flags: BTreeMap<ReceiptFlag, bool>,
    sort: ReceiptSort,
    year: Option<i32>,
}

impl ReceiptQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn with_flag(mut self, flag: ReceiptFlag, value: bool) -> Self {
        self.set_flag(flag, Some(value));
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn sort(&self) -> ReceiptSort {
        self.sort
    }

    pub fn set_sort(&mut self, sort: ReceiptSort) {
        self.sort = sort;
    }

    pub fn flag(&self, flag: ReceiptFlag) -> Option<bool> {
        self.flags.get(&flag).copied()
    }

    /// `None` clears the flag so it no longer narrows results.
    pub fn set_flag(&mut self, flag: ReceiptFlag, value: Option<bool>) {
        match value {
            Some(v) => {
                self.flags.insert(flag, v);
            }
            None => {
                self.flags.remove(&flag);
            }
        }
    }

    pub fn set_year(&mut self, year: Option<i32>) {
        self.year = year;
    }

    /// The requested year, defaulting to the current calendar year.
    pub fn year(&self) -> i32 {
        self.year.unwrap_or_else(|| chrono::Local::now().year())
    }
}

impl ListingQuery for ReceiptQuery {
    type Item = Receipt;

    const PATH: &'static str = "receipts/";

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("year", self.year().to_string())];
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }
        for (flag, value) in &self.flags {
            params.push((flag.api_key(), value.to_string()));
        }
        params.push(("sort", self.sort.api_key().to_string()));
        params
    }

    fn search(&self) -> &str {
        &self.search
    }

    fn set_search(&mut self, text: String) {
        self.search = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(params: &[(&'static str, String)]) -> Vec<&'static str> {
        params.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_default_user_query() {
        let params = UserQuery::new().params();
        assert_eq!(
            params,
            vec![
                ("page", "1".to_string()),
                ("sort", "employeeNumber".to_string())
            ]
        );
    }

    #[test]
    fn test_search_only_has_no_filter_keys() {
        let params = UserQuery::new().with_search("garcia").params();
        assert!(params.contains(&("search", "garcia".to_string())));
        for filter in UserFilter::ALL {
            assert!(!keys(&params).contains(&filter.api_key()));
        }
    }

    #[test]
    fn test_filters_translate_labels() {
        let params = UserQuery::new()
            .with_filter(UserFilter::Workshift, "Noche")
            .with_filter(UserFilter::Status, "Activo")
            .with_sort(UserSort::LastName)
            .params();

        assert!(params.contains(&("workshift", "night".to_string())));
        assert!(params.contains(&("isActive", "true".to_string())));
        assert!(params.contains(&("sort", "lastName".to_string())));
    }

    #[test]
    fn test_clearing_a_filter_removes_the_key() {
        let mut query = UserQuery::new().with_filter(UserFilter::Position, "Developer");
        assert!(keys(&query.params()).contains(&"position"));

        query.select(UserFilter::Position, ALL_LABEL);
        assert!(!keys(&query.params()).contains(&"position"));
        assert_eq!(query.selected_label(UserFilter::Position), None);

        query.select(UserFilter::Position, "Designer");
        query.clear_filter(UserFilter::Position);
        assert!(!keys(&query.params()).contains(&"position"));
    }

    #[test]
    fn test_option_without_value_behaves_like_all() {
        let mut query = UserQuery::new().with_filter(UserFilter::Role, "Supervisor");
        query.select(UserFilter::Role, "Administrador");
        assert!(!keys(&query.params()).contains(&"role"));
        assert_eq!(query, UserQuery::new());
    }

    #[test]
    fn test_search_is_trimmed_when_sent() {
        let mut query = UserQuery::new();
        query.set_search("  garcia ".to_string());
        assert_eq!(query.search(), "  garcia ");
        assert!(query.params().contains(&("search", "garcia".to_string())));
    }

    #[test]
    fn test_blank_search_is_omitted() {
        let params = UserQuery::new().with_search("   ").params();
        assert!(!keys(&params).contains(&"search"));
    }

    #[test]
    fn test_receipt_params_order_and_year() {
        let params = ReceiptQuery::new()
            .with_year(2024)
            .with_search("perez")
            .with_flag(ReceiptFlag::Sent, false)
            .params();

        assert_eq!(
            params,
            vec![
                ("year", "2024".to_string()),
                ("search", "perez".to_string()),
                ("isSended", "false".to_string()),
                ("sort", "date_desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_receipt_year_defaults_to_current() {
        let query = ReceiptQuery::new();
        assert_eq!(query.year(), chrono::Local::now().year());
        assert_eq!(query.params()[0].0, "year");
    }

    #[test]
    fn test_clearing_receipt_flag() {
        let mut query = ReceiptQuery::new().with_year(2024);
        query.set_flag(ReceiptFlag::Sent, Some(false));
        assert!(keys(&query.params()).contains(&"isSended"));

        query.set_flag(ReceiptFlag::Sent, None);
        assert!(!keys(&query.params()).contains(&"isSended"));
        assert_eq!(query.flag(ReceiptFlag::Sent), None);
    }
}
