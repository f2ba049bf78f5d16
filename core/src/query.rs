//! Filter-to-query translation.
//!
//! Produces `base` or `base?k1=v1&k2=v2` from a base path and an optional
//! filter. Parameter order comes from [`QueryFilter::facets`] and is part of
//! the contract: caching proxies in front of the gateway key on the exact
//! request line.

use crate::resource::QueryFilter;

/// Append the filter's defined fields to `base` as a query string.
///
/// Blank and whitespace-only values are treated as absent. The page is
/// appended last and only when positive; a non-positive page is dropped
/// silently because listing without a page is valid.
pub fn build_query_path<F: QueryFilter>(base: &str, filter: Option<&F>) -> String {
    let Some(filter) = filter else {
        return base.to_string();
    };

    let mut params: Vec<String> = filter
        .facets()
        .into_iter()
        .filter_map(|(key, value)| {
            let value = value.filter(|v| !v.trim().is_empty())?;
            Some(format!("{key}={}", urlencoding::encode(value)))
        })
        .collect();

    if let Some(page) = filter.page().filter(|p| *p > 0) {
        params.push(format!("page={page}"));
    }

    if params.is_empty() {
        base.to_string()
    } else {
        format!("{base}?{}", params.join("&"))
    }
}
