//! Unit tests for the identity module.

mod domain_tests;
mod hasher_tests;
mod store_tests;
