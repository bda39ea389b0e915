//! Database backends that execute built [`Statement`](crate::sql::Statement)s.
//!
//! Each backend is gated behind a feature flag.
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | PostgreSQL | `postgres` | Pooled tokio-postgres executor |

#[cfg(feature = "postgres")]
pub mod postgres;
