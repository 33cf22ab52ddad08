//! Boundary schema validation.
//!
//! Validates invariants on the assembly JSON model before it is resolved
//! into a timeline.

pub(crate) mod validate;
