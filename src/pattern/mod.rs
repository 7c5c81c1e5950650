//! The painted parts of the table: ring targets, line texture and their composition.

pub(crate) mod lines;
pub(crate) mod rings;
pub(crate) mod table;
