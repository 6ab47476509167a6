//! Client core for the agricultural prediction service: typed transport over
//! its REST endpoints, per-view submit/wait/result state machines with
//! stale-response protection, input validation, and dashboard aggregation.

pub mod application;
pub mod domain;
pub mod infrastructure;
