//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod wedding_card_repo;
pub mod wedding_repo;

pub use wedding_card_repo::WeddingCardRepo;
pub use wedding_repo::WeddingRepo;
