//! Offset/limit paging for list endpoints.

use serde::{Deserialize, Serialize};

/// Page window for a list request.
///
/// Both fields are optional; an absent field is left out of the query so the
/// API applies its own default. Present values are forwarded verbatim, and
/// range checks (limit 1..=100) are left to the API, which answers 409.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Paging {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl Paging {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
        }
    }

    /// Query pairs in wire order (`offset` then `limit`), skipping absent fields.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_window_emits_both_params() {
        assert_eq!(
            Paging::new(0, 20).query_pairs(),
            vec![("offset", "0".to_string()), ("limit", "20".to_string())]
        );
    }

    #[test]
    fn default_emits_nothing() {
        assert!(Paging::default().query_pairs().is_empty());
    }

    #[test]
    fn out_of_range_limit_is_forwarded() {
        let paging = Paging {
            offset: None,
            limit: Some(500),
        };
        assert_eq!(paging.query_pairs(), vec![("limit", "500".to_string())]);
    }
}
