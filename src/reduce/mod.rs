pub(crate) mod engine;
pub(crate) mod grouping;
pub(crate) mod usage;
