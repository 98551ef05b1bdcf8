//! Database row structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the table row and the `Deserialize` DTO used for writes.

pub mod wedding;
pub mod wedding_card;
