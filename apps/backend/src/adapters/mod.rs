//! SeaORM adapters: one function per query or mutation.
//!
//! Adapter functions return `DbErr`; the repos layer maps to `DomainError`.

pub mod authors_sea;
pub mod books_sea;
