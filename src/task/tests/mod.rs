//! Unit tests for the task module.
//!
//! Tests are organised by domain concept: the status machine, the
//! attachment ledger, card view state, wire normalization, and the
//! orchestration services.

mod attachment_tests;
mod status_tests;
