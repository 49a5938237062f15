use std::collections::BTreeMap;

/// Tally of responses that came back with a non-2xx status, keyed by status code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpErrorStats {
    pub(crate) errors: BTreeMap<u16, u32>,
}

impl HttpErrorStats {
    pub fn new() -> Self {
        HttpErrorStats {
            errors: BTreeMap::new(),
        }
    }

    // 记录一次状态码
    pub(crate) fn increment(&mut self, status_code: u16) {
        *self.errors.entry(status_code).or_insert(0) += 1;
    }

    pub(crate) fn merge(&mut self, other: &HttpErrorStats) {
        for (status_code, count) in &other.errors {
            *self.errors.entry(*status_code).or_insert(0) += count;
        }
    }

    pub fn errors(&self) -> &BTreeMap<u16, u32> {
        &self.errors
    }

    pub fn total(&self) -> u32 {
        self.errors.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_adds_counts_per_status() {
        let mut left = HttpErrorStats::new();
        left.increment(404);
        left.increment(500);

        let mut right = HttpErrorStats::new();
        right.increment(404);
        right.increment(503);

        left.merge(&right);
        assert_eq!(left.errors().get(&404), Some(&2));
        assert_eq!(left.errors().get(&500), Some(&1));
        assert_eq!(left.errors().get(&503), Some(&1));
        assert_eq!(left.total(), 4);
    }
}
