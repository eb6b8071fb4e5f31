//! Unit tests for the task module.

mod announcer_tests;
mod ledger_tests;
mod support;
