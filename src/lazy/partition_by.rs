use std::fmt;

use super::Cursor;

/// Groups consecutive upstream elements with equal keys into runs.
///
/// Each element is the whole run. One element of lookahead is kept between
/// runs; the final run is flushed when the upstream is exhausted.
pub struct PartitionBy<C: Cursor, F, K> {
    key: F,
    upstream: C,
    pending: Option<(K, C::Item)>,
    run: Option<Vec<C::Item>>,
    done: bool,
}

impl<C, F, K> PartitionBy<C, F, K>
where
    C: Cursor,
    C::Item: Clone,
    F: Fn(&C::Item) -> K,
    K: PartialEq,
{
    /// Partitions `upstream` by the result of `key`.
    pub const fn new(key: F, upstream: C) -> Self {
        Self {
            key,
            upstream,
            pending: None,
            run: None,
            done: false,
        }
    }

    fn pull(&mut self) -> Option<(K, C::Item)> {
        if !self.upstream.advance() {
            return None;
        }
        self.upstream
            .current()
            .map(|item| ((self.key)(item), item.clone()))
    }
}

impl<C, F, K> Cursor for PartitionBy<C, F, K>
where
    C: Cursor,
    C::Item: Clone,
    F: Fn(&C::Item) -> K,
    K: PartialEq,
{
    type Item = Vec<C::Item>;

    fn reset(&mut self) {
        self.upstream.reset();
        self.pending = None;
        self.run = None;
        self.done = false;
    }

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        let head = match self.pending.take() {
            Some(head) => Some(head),
            None => self.pull(),
        };
        let Some((run_key, first)) = head else {
            self.done = true;
            self.run = None;
            return false;
        };

        let mut run = vec![first];
        while let Some((key, item)) = self.pull() {
            if key == run_key {
                run.push(item);
            } else {
                self.pending = Some((key, item));
                break;
            }
        }
        self.run = Some(run);
        true
    }

    fn current(&self) -> Option<&Vec<C::Item>> {
        self.run.as_ref()
    }
}

impl<C, F, K> fmt::Debug for PartitionBy<C, F, K>
where
    C: Cursor + fmt::Debug,
    C::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PartitionBy")
            .field("upstream", &self.upstream)
            .field("run", &self.run)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::lazy::{Cursor, lazy};

    #[test]
    fn test_runs_by_parity() {
        let runs = lazy(vec![1, 3, 5, 2, 4, 7]).partition_by(|n: &i32| n % 2 != 0);
        assert_eq!(runs.realize(), vec![vec![1, 3, 5], vec![2, 4], vec![7]]);
    }

    #[test]
    fn test_single_run() {
        let runs = lazy("aaa").partition_by(|c: &char| *c);
        assert_eq!(runs.realize(), vec![vec!['a', 'a', 'a']]);
    }

    #[test]
    fn test_empty_upstream_has_no_runs() {
        let mut runs = lazy(Vec::<i32>::new()).partition_by(|n: &i32| *n);
        assert!(!runs.advance());
        assert_eq!(runs.current(), None);
    }

    #[test]
    fn test_final_run_is_flushed_once() {
        let mut runs = lazy(vec![1, 2]).partition_by(|n: &i32| *n);
        assert!(runs.advance());
        assert_eq!(runs.current(), Some(&vec![1]));
        assert!(runs.advance());
        assert_eq!(runs.current(), Some(&vec![2]));
        assert!(!runs.advance());
        assert!(!runs.advance());
    }
}
