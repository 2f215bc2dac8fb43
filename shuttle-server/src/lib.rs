//! Live departures board for a shuttle service.
//!
//! Serves the company's marketing page with a live schedule display:
//! the charter van's current status and the shuttle loop's next
//! departure, re-evaluated from the wall clock every 30 seconds.

pub mod board;
pub mod domain;
pub mod schedule;
pub mod web;
