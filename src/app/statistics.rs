//! Batch counters.

use log::info;

use crate::config::HTTP_STATUS_OK;

/// Tallies for one batch run.
///
/// Single-writer, incremented exactly once per name after its outcome is
/// finalized. The three outcome buckets always sum to `total_names`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Names processed
    pub total_names: usize,
    /// Names whose outcome was a 200 response
    pub total_200_status: usize,
    /// Names whose outcome carried any other status code
    pub total_other_status: usize,
    /// Names where every candidate failed without a response
    pub total_exceptions: usize,
}

impl Counters {
    /// Records one finalized outcome by its status code.
    pub fn record(&mut self, status_code: Option<u16>) {
        self.total_names += 1;
        match status_code {
            Some(HTTP_STATUS_OK) => self.total_200_status += 1,
            Some(_) => self.total_other_status += 1,
            None => self.total_exceptions += 1,
        }
    }

    /// Logs the four totals at the end of a batch.
    pub fn log_summary(&self) {
        info!("total_names: {}", self.total_names);
        info!("total_200_status: {}", self.total_200_status);
        info!("total_other_status: {}", self.total_other_status);
        info!("total_exceptions: {}", self.total_exceptions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_buckets() {
        let mut counters = Counters::default();
        counters.record(Some(200));
        counters.record(Some(404));
        counters.record(Some(500));
        counters.record(None);
        counters.record(Some(200));

        assert_eq!(counters.total_names, 5);
        assert_eq!(counters.total_200_status, 2);
        assert_eq!(counters.total_other_status, 2);
        assert_eq!(counters.total_exceptions, 1);
    }

    #[test]
    fn test_counters_sum_law() {
        let mut counters = Counters::default();
        let statuses = [
            Some(200),
            Some(301),
            Some(403),
            None,
            Some(405),
            None,
            Some(200),
            Some(503),
        ];
        for status in statuses {
            counters.record(status);
        }
        assert_eq!(
            counters.total_200_status + counters.total_other_status + counters.total_exceptions,
            counters.total_names
        );
    }

    #[test]
    fn test_empty_batch() {
        let counters = Counters::default();
        assert_eq!(counters.total_names, 0);
        assert_eq!(
            counters.total_200_status + counters.total_other_status + counters.total_exceptions,
            0
        );
    }
}
