//! Postgres read layer for the chat viewer.
//!
//! The schema is owned by the upstream messaging system: this crate
//! never migrates or writes, it only reads the `"Instance"` and
//! `"Message"` tables that system maintains.
//!
//! # Example
//!
//! ```no_run
//! use database::{instance, message, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/evolution").await?;
//!
//!     if let Some(inst) = instance::find_by_name(db.pool(), "ana").await? {
//!         let rows = message::list_for_contact(
//!             db.pool(),
//!             &inst.id,
//!             "5511987654321@s.whatsapp.net",
//!         )
//!         .await?;
//!         println!("{} messages", rows.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod instance;
pub mod message;
pub mod models;

pub use error::{DatabaseError, Result};
pub use models::{Instance, StoredMessage};

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Default pool size. Reads are short and independent, so a small
    /// pool covers concurrent viewer requests.
    const DEFAULT_POOL_SIZE: u32 = 10;

    /// Connect to the row store.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect(url)
            .await?;

        tracing::info!("Connected to Postgres (pool size: {})", pool_size);

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
