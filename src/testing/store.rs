//! Ordered, in-memory list of test cases for the current session.
//!
//! Insertion order is display order and execution order. The list only
//! changes through `push`, `replace_all` and `record`.

use super::case::{Outcome, TestCase, TestResult};

#[derive(Debug, Clone, Default)]
pub struct TestStore {
    cases: Vec<TestCase>,
    revision: u64,
}

impl TestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a manually added test. The result always starts unset.
    pub fn push(&mut self, mut case: TestCase) {
        case.result = None;
        case.detail = None;
        self.cases.push(case);
    }

    /// Swap in a freshly imported list and bump the revision so results
    /// still in flight for the old list are dropped.
    pub fn replace_all(&mut self, cases: Vec<TestCase>) {
        self.cases = cases;
        for case in &mut self.cases {
            case.result = None;
            case.detail = None;
        }
        self.revision += 1;
    }

    /// Write an execution outcome back to the entry at `index`.
    ///
    /// Returns `false` (and changes nothing) when the outcome belongs to an
    /// older revision or the index no longer exists.
    pub fn record(&mut self, revision: u64, index: usize, outcome: &Outcome) -> bool {
        if revision != self.revision {
            return false;
        }
        match self.cases.get_mut(index) {
            Some(case) => {
                case.result = Some(outcome.result());
                case.detail = Some(outcome.detail());
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&TestCase> {
        self.cases.get(index)
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.count(TestResult::Success)
    }

    pub fn failure_count(&self) -> usize {
        self.count(TestResult::Failure)
    }

    fn count(&self, result: TestResult) -> usize {
        self.cases
            .iter()
            .filter(|case| case.result == Some(result))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::method::HttpMethod;

    fn make_case(endpoint: &str) -> TestCase {
        TestCase::new("https://api.x", endpoint, Some(HttpMethod::Get), "{}")
    }

    #[test]
    fn push_appends_unset_and_keeps_existing_results() {
        let mut store = TestStore::new();
        store.push(make_case("/a"));
        assert!(store.record(0, 0, &Outcome::Failure("boom".into())));

        let mut added = make_case("/b");
        added.result = Some(TestResult::Success);
        store.push(added);

        assert_eq!(store.len(), 2);
        assert_eq!(store.cases()[0].result, Some(TestResult::Failure));
        assert_eq!(store.cases()[0].detail.as_deref(), Some("boom"));
        assert_eq!(store.cases()[1].result, None);
        assert_eq!(store.cases()[1].endpoint, "/b");
    }

    #[test]
    fn duplicates_are_kept_in_insertion_order() {
        let mut store = TestStore::new();
        store.push(make_case("/same"));
        store.push(make_case("/same"));
        store.push(make_case("/other"));

        let endpoints: Vec<_> = store.cases().iter().map(|c| c.endpoint.as_str()).collect();
        assert_eq!(endpoints, ["/same", "/same", "/other"]);
    }

    #[test]
    fn replace_all_resets_results_and_bumps_revision() {
        let mut store = TestStore::new();
        store.push(make_case("/old"));

        let mut incoming = make_case("/new");
        incoming.result = Some(TestResult::Failure);
        store.replace_all(vec![incoming, make_case("/newer")]);

        assert_eq!(store.revision(), 1);
        assert_eq!(store.len(), 2);
        assert!(store.cases().iter().all(|case| case.result.is_none()));
    }

    #[test]
    fn record_touches_only_the_target_entry() {
        let mut store = TestStore::new();
        store.push(make_case("/a"));
        store.push(make_case("/b"));
        store.push(make_case("/c"));
        let before = store.cases().to_vec();

        assert!(store.record(0, 1, &Outcome::Failure("refused".into())));

        assert_eq!(store.cases()[0], before[0]);
        assert_eq!(store.cases()[2], before[2]);
        assert_eq!(store.cases()[1].result, Some(TestResult::Failure));
        assert_eq!(store.cases()[1].endpoint, before[1].endpoint);
        assert_eq!(store.cases()[1].input, before[1].input);
    }

    #[test]
    fn record_ignores_stale_revision_and_bad_index() {
        let mut store = TestStore::new();
        store.push(make_case("/a"));
        store.replace_all(vec![make_case("/b")]);

        assert!(!store.record(0, 0, &Outcome::Failure("late".into())));
        assert!(!store.record(1, 5, &Outcome::Failure("gone".into())));
        assert_eq!(store.cases()[0].result, None);
    }

    #[test]
    fn counters_track_results() {
        let mut store = TestStore::new();
        for endpoint in ["/a", "/b", "/c"] {
            store.push(make_case(endpoint));
        }
        store.record(0, 0, &Outcome::Failure("x".into()));
        store.record(0, 2, &Outcome::Failure("y".into()));

        assert_eq!(store.len(), 3);
        assert_eq!(store.success_count(), 0);
        assert_eq!(store.failure_count(), 2);
    }
}
