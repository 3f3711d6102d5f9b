//! Dashboard aggregation.
//!
//! # Responsibility
//! - Compute entity totals and status histograms for the dashboard view.
//!
//! # Invariants
//! - Purely read-side; recomputed fully on every call, never cached.
//! - Status strings are bucketed verbatim: no casing or whitespace
//!   normalization, so `Active` and `active` are distinct buckets.
//! - Rows without a status are tallied under [`UNSET_STATUS_LABEL`], so
//!   each histogram's bucket sum equals the corresponding total.

use crate::model::company::Company;
use crate::model::contact::Contact;
use crate::model::program::Program;
use crate::model::task::Task;
use crate::repo::entity_repo::{RepoResult, SqliteEntityRepository};
use rusqlite::Connection;
use serde::Serialize;
use std::collections::BTreeMap;

/// Histogram bucket for rows whose status column is NULL.
pub const UNSET_STATUS_LABEL: &str = "";

/// One full dashboard computation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_contacts: u64,
    pub total_companies: u64,
    pub total_programs: u64,
    pub total_tasks: u64,
    pub program_status: BTreeMap<String, u64>,
    pub task_status: BTreeMap<String, u64>,
}

/// Computes the dashboard summary over the current table contents.
pub fn dashboard_summary(conn: &Connection) -> RepoResult<DashboardSummary> {
    let contacts: SqliteEntityRepository<'_, Contact> = SqliteEntityRepository::new(conn);
    let companies: SqliteEntityRepository<'_, Company> = SqliteEntityRepository::new(conn);
    let programs: SqliteEntityRepository<'_, Program> = SqliteEntityRepository::new(conn);
    let tasks: SqliteEntityRepository<'_, Task> = SqliteEntityRepository::new(conn);

    let program_rows = programs.list_all()?;
    let task_rows = tasks.list_all()?;

    Ok(DashboardSummary {
        total_contacts: contacts.count()?,
        total_companies: companies.count()?,
        total_programs: programs.count()?,
        total_tasks: tasks.count()?,
        program_status: status_histogram(program_rows.iter().map(|row| row.status.as_deref())),
        task_status: status_histogram(task_rows.iter().map(|row| row.status.as_deref())),
    })
}

fn status_histogram<'a>(statuses: impl Iterator<Item = Option<&'a str>>) -> BTreeMap<String, u64> {
    let mut buckets = BTreeMap::new();
    for status in statuses {
        let label = status.unwrap_or(UNSET_STATUS_LABEL).to_string();
        *buckets.entry(label).or_insert(0) += 1;
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::status_histogram;

    #[test]
    fn histogram_keeps_distinct_casing_buckets() {
        let statuses = [Some("Active"), Some("active"), Some("Active"), None];
        let buckets = status_histogram(statuses.into_iter());

        assert_eq!(buckets.get("Active"), Some(&2));
        assert_eq!(buckets.get("active"), Some(&1));
        assert_eq!(buckets.get(""), Some(&1));
        assert_eq!(buckets.values().sum::<u64>(), statuses.len() as u64);
    }
}
