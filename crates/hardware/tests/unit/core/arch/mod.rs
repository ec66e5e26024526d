/// Condition flag tests.
pub mod flags;
