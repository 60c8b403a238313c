//! Bounded record of visited routes, owned by whoever drives navigation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Route {
    pub kind: String,
    pub path: String,
}

impl Route {
    pub fn new(kind: impl Into<String>, path: impl Into<String>) -> Self {
        Route { kind: kind.into(), path: path.into() }
    }

    /// Kind is the first path segment: `/coach/clients/7` is a `coach` route.
    pub fn from_path(path: &str) -> Self {
        static FIRST_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/*([^/?#]+)").unwrap());
        let kind = FIRST_SEGMENT.captures(path).map(|c| c[1].to_string()).unwrap_or_default();
        Route { kind, path: path.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationHistory {
    capacity: usize,
    entries: VecDeque<Route>,
}

impl Default for NavigationHistory {
    fn default() -> Self { NavigationHistory::with_capacity(DEFAULT_CAPACITY) }
}

impl NavigationHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        NavigationHistory { capacity, entries: VecDeque::with_capacity(capacity) }
    }

    pub fn capacity(&self) -> usize { self.capacity }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn clear(&mut self) { self.entries.clear(); }

    /// Records `route`, evicting the oldest entry when full. Re-pushing the current route is a no-op.
    pub fn push(&mut self, route: Route) {
        if self.capacity == 0 || self.entries.back() == Some(&route) { return; }
        while self.entries.len() >= self.capacity { self.entries.pop_front(); }
        self.entries.push_back(route);
    }

    pub fn current(&self) -> Option<&Route> { self.entries.back() }

    /// Newest route of `kind` before the current one.
    pub fn previous_of_kind(&self, kind: &str) -> Option<&Route> {
        self.entries.iter().rev().skip(1).find(|r| r.kind == kind)
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Route> { self.entries.iter() }

    /// Shrinking drops the oldest routes.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.entries.len() > capacity { self.entries.pop_front(); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_first_segment() {
        assert_eq!(Route::from_path("/coach/clients/7").kind, "coach");
        assert_eq!(Route::from_path("admin?tab=2").kind, "admin");
        assert_eq!(Route::from_path("/").kind, "");
    }

    #[test]
    fn full_buffer_evicts_oldest() {
        let mut h = NavigationHistory::with_capacity(2);
        h.push(Route::from_path("/a/1"));
        h.push(Route::from_path("/b/1"));
        h.push(Route::from_path("/c/1"));
        let paths: Vec<&str> = h.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/b/1", "/c/1"]);
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let mut h = NavigationHistory::with_capacity(0);
        h.push(Route::from_path("/a"));
        assert!(h.is_empty());
    }

    #[test]
    fn repeated_current_route_is_ignored() {
        let mut h = NavigationHistory::default();
        h.push(Route::from_path("/a"));
        h.push(Route::from_path("/a"));
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn previous_of_kind_skips_current() {
        let mut h = NavigationHistory::default();
        h.push(Route::from_path("/folders/1"));
        h.push(Route::from_path("/chat/9"));
        h.push(Route::from_path("/folders/2"));
        assert_eq!(h.previous_of_kind("folders").map(|r| r.path.as_str()), Some("/folders/1"));
        assert_eq!(h.previous_of_kind("chat").map(|r| r.path.as_str()), Some("/chat/9"));
        assert!(h.previous_of_kind("admin").is_none());
    }

    #[test]
    fn shrinking_capacity_drops_oldest() {
        let mut h = NavigationHistory::default();
        for i in 0..5 { h.push(Route::from_path(&format!("/x/{i}"))); }
        h.set_capacity(2);
        assert_eq!(h.current().map(|r| r.path.as_str()), Some("/x/4"));
        assert_eq!(h.len(), 2);
    }
}
