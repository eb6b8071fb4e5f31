//! Unit tests for the workspace.

mod support;
