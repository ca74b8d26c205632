use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use crate::error::Result;

/// One database transaction spanning a whole use-case.
///
/// Repository functions take `&mut PgConnection`; handing them `conn()` makes
/// every statement join this transaction. Dropping the unit of work without
/// calling [`UnitOfWork::commit`] rolls everything back.
pub struct UnitOfWork {
    tx: Transaction<'static, Postgres>,
}

impl UnitOfWork {
    pub async fn begin(pool: &PgPool) -> Result<Self> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    pub async fn commit(self) -> Result<()> {
        self.tx.commit().await?;
        Ok(())
    }
}
