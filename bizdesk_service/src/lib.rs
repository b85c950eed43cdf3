/*!
Bizdesk Service

The small-business management API: CRUD over clients, projects (with task
sub-lists), transactions, targets and documents, plus the aggregated
dashboard, behind a bearer-token gate.
*/

#![warn(
    unreachable_pub,
    redundant_lifetimes,
    unsafe_code,
    non_local_definitions,
    clippy::needless_pass_by_value,
    clippy::needless_pass_by_ref_mut
)]

pub mod api;
pub mod config;
