//! Application layer: typed repositories over the document store port and
//! the fulfillment engine driving payment and order processing.

pub mod engine;
pub mod repository;
