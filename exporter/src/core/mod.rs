//! Pure naming logic for the export (no I/O).

pub mod naming;
