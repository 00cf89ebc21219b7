//! Test suites for the action executor.

pub(crate) mod support;
