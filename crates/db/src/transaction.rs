//! Transaction scope.
//!
//! [`in_transaction`] runs one unit of work against a freshly begun
//! transaction: commit when the work returns `Ok`, rollback when it returns
//! `Err` or panics. The original error or panic is handed back untouched.

use std::panic::AssertUnwindSafe;

use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;

use crate::error::DbError;
use crate::DbPool;

/// An open Postgres transaction.
pub type PgTx = sqlx::Transaction<'static, sqlx::Postgres>;

/// Begins, commits and rolls back transactions of type [`TxManager::Tx`].
#[async_trait]
pub trait TxManager: Send + Sync {
    type Tx: Send + 'static;

    async fn begin(&self) -> Result<Self::Tx, DbError>;

    async fn commit(&self, tx: Self::Tx) -> Result<(), DbError>;

    async fn rollback(&self, tx: Self::Tx) -> Result<(), DbError>;
}

/// [`TxManager`] over a Postgres connection pool.
#[derive(Debug, Clone)]
pub struct PgTxManager {
    pool: DbPool,
}

impl PgTxManager {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TxManager for PgTxManager {
    type Tx = PgTx;

    async fn begin(&self) -> Result<PgTx, DbError> {
        Ok(self.pool.begin().await?)
    }

    async fn commit(&self, tx: PgTx) -> Result<(), DbError> {
        Ok(tx.commit().await?)
    }

    async fn rollback(&self, tx: PgTx) -> Result<(), DbError> {
        Ok(tx.rollback().await?)
    }
}

/// Run `work` inside a transaction begun on `manager`.
///
/// - `Ok` commits; a failed commit is returned as the error.
/// - `Err` rolls back, then returns the same error.
/// - A panic rolls back, then resumes the same panic.
///
/// A failed rollback is logged and never replaces the original failure.
pub async fn in_transaction<M, T, E, F>(manager: &M, work: F) -> Result<T, E>
where
    M: TxManager + ?Sized,
    E: From<DbError>,
    F: for<'t> FnOnce(&'t mut M::Tx) -> BoxFuture<'t, Result<T, E>>,
{
    let mut tx = manager.begin().await?;

    let outcome = AssertUnwindSafe(work(&mut tx)).catch_unwind().await;

    match outcome {
        Ok(Ok(value)) => {
            manager.commit(tx).await?;
            Ok(value)
        }
        Ok(Err(err)) => {
            rollback_logged(manager, tx).await;
            Err(err)
        }
        Err(panic) => {
            rollback_logged(manager, tx).await;
            std::panic::resume_unwind(panic)
        }
    }
}

async fn rollback_logged<M: TxManager + ?Sized>(manager: &M, tx: M::Tx) {
    if let Err(err) = manager.rollback(tx).await {
        tracing::error!(error = %err, "Transaction rollback failed");
    }
}
