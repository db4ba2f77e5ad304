//! Query string decoding

use std::collections::HashMap;

/// Decoded query parameters, every key keeps all of its values in arrival order
pub type QueryParams = HashMap<String, Vec<String>>;

/// Parse a query string into a multi-valued map
///
/// Pairs are form-url-decoded (`+` becomes a space, `%XX` escapes are resolved).
/// Pairs with an empty value are dropped, so `type=` is treated like a missing
/// `type`.
///
/// # Examples
/// ```
/// use clash_subserver::utils::query::parse_query_string;
///
/// let params = parse_query_string("ip=1.2.3.4&ip=5.6.7.8&port=");
/// assert_eq!(params["ip"], vec!["1.2.3.4", "5.6.7.8"]);
/// assert!(!params.contains_key("port"));
/// ```
pub fn parse_query_string(query: &str) -> QueryParams {
    let mut params = QueryParams::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        params
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    params
}

/// First value recorded for `key`, if any
pub fn first_value<'a>(params: &'a QueryParams, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .and_then(|values| values.first())
        .map(String::as_str)
}
