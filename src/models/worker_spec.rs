use std::sync::Arc;

use crate::models::request_option::RequestOption;

/// Immutable input of one hammer.
#[derive(Debug, Clone)]
pub struct WorkerSpec {
    pub hammer_id: usize,
    pub throws: usize,
    pub request: Arc<RequestOption>,
}

impl WorkerSpec {
    /// One spec per hammer, ids `0..hammers`, all sharing the same request settings.
    pub fn expand(hammers: usize, throws: usize, request: &Arc<RequestOption>) -> Vec<WorkerSpec> {
        (0..hammers)
            .map(|hammer_id| WorkerSpec {
                hammer_id,
                throws,
                request: Arc::clone(request),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_assigns_sequential_ids() {
        let request = Arc::new(RequestOption {
            url: "http://127.0.0.1:1/".parse().unwrap(),
            verbose: true,
            timeout_secs: 0,
            user_agent: "thor-test".to_string(),
        });
        let specs = WorkerSpec::expand(4, 7, &request);
        let ids: Vec<usize> = specs.iter().map(|s| s.hammer_id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert!(specs.iter().all(|s| s.throws == 7 && s.request.verbose));
        assert_eq!(Arc::strong_count(&request), 5);
    }
}
