//! Unit tests for the storage module.

mod key_tests;
mod memory_store_tests;
