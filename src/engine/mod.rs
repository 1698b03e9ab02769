//! Synchronous core of the pipeline: parse, resolve, order, aggregate.
//!
//! Nothing in here suspends or performs I/O.

pub mod aggregator;
pub mod currency;
pub mod ordering;
pub mod parser;
