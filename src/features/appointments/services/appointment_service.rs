use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::appointments::dtos::AppointmentResponseDto;
use crate::features::appointments::models::{Appointment, NewAppointment};

/// Service for managing appointments
pub struct AppointmentService {
    pool: SqlitePool,
}

impl AppointmentService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new appointment; the transaction rolls back if any step fails
    pub async fn create(&self, new: NewAppointment) -> Result<AppointmentResponseDto> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (name, phone, date, reason, facility_name, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, name, phone, date, reason, facility_name, created_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.phone)
        .bind(&new.date)
        .bind(&new.reason)
        .bind(&new.facility_name)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create appointment: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            "Appointment created: id={}, facility={}",
            appointment.id,
            appointment.facility_name
        );

        Ok(appointment.into())
    }

    /// All appointments, newest first
    pub async fn list(&self) -> Result<Vec<AppointmentResponseDto>> {
        let appointments = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT id, name, phone, date, reason, facility_name, created_at
            FROM appointments
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list appointments: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(appointments.into_iter().map(Into::into).collect())
    }
}
