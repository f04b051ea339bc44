use crate::models::DbAppointment;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn list_appointments(pool: &Pool<Postgres>) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, slot_instant, created_at
        FROM appointments
        ORDER BY slot_instant ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    tracing::debug!("Loaded {} appointments", appointments.len());
    Ok(appointments)
}
