// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::model::RestoreJob;
use crate::infrastructure::constants::RESTORE_STATUS_NONE;
use chrono::{DateTime, FixedOffset};
use std::cmp::Ordering;

fn parse_date(job: &RestoreJob) -> Option<DateTime<FixedOffset>> {
    job.date
        .as_deref()
        .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
}

/// Newest first. Two RFC 3339 dates compare as instants, anything else compares
/// as raw strings in descending order. Jobs without a date go last.
fn newest_first(a: &RestoreJob, b: &RestoreJob) -> Ordering {
    match (parse_date(a), parse_date(b)) {
        (Some(a), Some(b)) => b.cmp(&a),
        _ => b.date.cmp(&a.date),
    }
}

/// Status of the most recent restore of `backup_id`, or `-` if it was never restored
pub fn restore_status(backup_id: &str, restore_jobs: Option<&[RestoreJob]>) -> String {
    let Some(jobs) = restore_jobs else {
        return RESTORE_STATUS_NONE.to_string();
    };

    let mut jobs: Vec<&RestoreJob> = jobs.iter().collect();
    jobs.sort_by(|a, b| newest_first(a, b));

    jobs.into_iter()
        .find(|job| job.backup_id.as_deref() == Some(backup_id))
        .and_then(|job| job.status.clone())
        .unwrap_or_else(|| RESTORE_STATUS_NONE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(backup_id: &str, date: &str, status: &str) -> RestoreJob {
        RestoreJob {
            backup_id: Some(backup_id.to_string()),
            date: Some(date.to_string()),
            status: Some(status.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_latest_restore_wins() {
        let jobs = vec![
            job("b1", "2024-01-01T10:00:00Z", "failed"),
            job("b1", "2024-03-01T10:00:00Z", "finished"),
            job("b2", "2024-05-01T10:00:00Z", "running"),
            job("b1", "2024-02-01T10:00:00+02:00", "cancelled"),
        ];
        assert_eq!(restore_status("b1", Some(jobs.as_slice())), "finished");
        assert_eq!(restore_status("b2", Some(jobs.as_slice())), "running");
    }

    #[test]
    fn test_never_restored() {
        let jobs = vec![job("b1", "2024-01-01T10:00:00Z", "finished")];
        assert_eq!(restore_status("b9", Some(jobs.as_slice())), "-");
        assert_eq!(restore_status("b1", None), "-");
    }

    #[test]
    fn test_undated_jobs_sort_last() {
        let mut undated = job("b1", "", "unknown");
        undated.date = None;
        let jobs = vec![undated, job("b1", "2023-06-01T00:00:00Z", "finished")];
        assert_eq!(restore_status("b1", Some(jobs.as_slice())), "finished");
    }

    #[test]
    fn test_non_rfc3339_dates_compare_as_strings() {
        let jobs = vec![
            job("b1", "2024-01-01 00:00:00", "old"),
            job("b1", "2024-06-01 00:00:00", "new"),
        ];
        assert_eq!(restore_status("b1", Some(jobs.as_slice())), "new");
    }
}
