use http::HeaderMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Read-only view of request headers, keyed case-insensitively.
pub trait HeaderSet {
    /// Raw bytes of the first value stored under `name`, if any.
    fn first_value(&self, name: &str) -> Option<&[u8]>;
}

impl HeaderSet for HeaderMap {
    fn first_value(&self, name: &str) -> Option<&[u8]> {
        self.get(name).map(|v| v.as_bytes())
    }
}

/// Plain `name -> values` maps as produced by hand or by non-`http` stacks.
///
/// When several keys match `name` ignoring case, an exact match wins, then
/// the smallest key, so lookups do not depend on hash iteration order.
impl<S: BuildHasher> HeaderSet for HashMap<String, Vec<String>, S> {
    fn first_value(&self, name: &str) -> Option<&[u8]> {
        let values = match self.get(name) {
            Some(values) => values,
            None => self
                .iter()
                .filter(|(k, _)| k.eq_ignore_ascii_case(name))
                .min_by(|a, b| a.0.cmp(b.0))
                .map(|(_, v)| v)?,
        };
        values.first().map(|v| v.as_bytes())
    }
}
