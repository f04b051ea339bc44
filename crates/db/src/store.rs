use agenda_core::{models::appointment::Appointment, ports::AppointmentStore};
use async_trait::async_trait;
use eyre::{Result, WrapErr};

use crate::{DbPool, repositories};

/// [`AppointmentStore`] backed by the PostgreSQL `appointments` table.
#[derive(Debug, Clone)]
pub struct PgAppointmentStore {
    pool: DbPool,
}

impl PgAppointmentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentStore for PgAppointmentStore {
    async fn list_appointments(&self) -> Result<Vec<Appointment>> {
        let rows = repositories::appointment::list_appointments(&self.pool)
            .await
            .wrap_err("Failed to list appointments")?;

        Ok(rows.into_iter().map(Appointment::from).collect())
    }
}
