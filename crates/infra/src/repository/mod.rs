//! Repository backends: one Postgres and one in-memory implementation per
//! port.

pub mod in_memory;
pub mod postgres;
