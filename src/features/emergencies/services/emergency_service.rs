use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::emergencies::dtos::EmergencyAlertResponseDto;
use crate::features::emergencies::models::{EmergencyAlert, NewEmergencyAlert};

/// Service for managing emergency alerts
pub struct EmergencyService {
    pool: SqlitePool,
}

impl EmergencyService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: NewEmergencyAlert) -> Result<EmergencyAlertResponseDto> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let alert = sqlx::query_as::<_, EmergencyAlert>(
            r#"
            INSERT INTO emergency_alerts (latitude, longitude, message, user_info, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, latitude, longitude, message, user_info, created_at
            "#,
        )
        .bind(new.latitude)
        .bind(new.longitude)
        .bind(&new.message)
        .bind(&new.user_info)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create emergency alert: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::warn!(
            "Emergency alert raised: id={}, lat={}, lon={}",
            alert.id,
            alert.latitude,
            alert.longitude
        );

        Ok(alert.into())
    }

    /// All alerts, newest first
    pub async fn list(&self) -> Result<Vec<EmergencyAlertResponseDto>> {
        let alerts = sqlx::query_as::<_, EmergencyAlert>(
            r#"
            SELECT id, latitude, longitude, message, user_info, created_at
            FROM emergency_alerts
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list emergency alerts: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(alerts.into_iter().map(Into::into).collect())
    }
}
