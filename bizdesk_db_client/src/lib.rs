//! Postgres access for the bizdesk service: one module per entity with
//! create/get/update/delete operations, reference resolution into the
//! projection shapes the API returns, and the read-only aggregation queries
//! behind the dashboard and finance summary.

use sqlx::{Postgres, QueryBuilder};

pub mod client;
pub mod document;
pub mod project;
pub mod stats;
pub mod target;
pub mod transaction;
pub mod user_profile;

/// Pushes `" WHERE "` on the first condition and `" AND "` afterwards
pub(crate) fn push_condition(query: &mut QueryBuilder<'_, Postgres>, first: &mut bool) {
    if *first {
        query.push(" WHERE ");
        *first = false;
    } else {
        query.push(" AND ");
    }
}
