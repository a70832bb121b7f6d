//! Domain layer: the records the service stores, their schemas, and the
//! port to the document store.

pub mod cast;
pub mod customer;
pub mod id;
pub mod item;
pub mod model;
pub mod order;
pub mod ports;
