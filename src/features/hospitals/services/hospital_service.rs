use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::hospitals::dtos::{HospitalResponseDto, UpdateHospitalDto};
use crate::features::hospitals::models::{Hospital, NewHospital};

const HOSPITAL_COLUMNS: &str = "id, name, type, latitude, longitude, address, phone, \
     opening_hours, website, description, is_featured, created_at";

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Hospital with id {} not found", id))
}

/// Service for the curated facility list
pub struct HospitalService {
    pool: SqlitePool,
}

impl HospitalService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: NewHospital) -> Result<HospitalResponseDto> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let query = format!(
            r#"
            INSERT INTO hospitals (name, type, latitude, longitude, address, phone,
                                   opening_hours, website, description, is_featured, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            HOSPITAL_COLUMNS
        );

        let hospital = sqlx::query_as::<_, Hospital>(&query)
            .bind(&new.name)
            .bind(&new.facility_type)
            .bind(new.latitude)
            .bind(new.longitude)
            .bind(&new.address)
            .bind(&new.phone)
            .bind(&new.opening_hours)
            .bind(&new.website)
            .bind(&new.description)
            .bind(new.is_featured)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create hospital: {:?}", e);
                AppError::Database(e)
            })?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            "Hospital created: id={}, name={}, type={}",
            hospital.id,
            hospital.name,
            hospital.facility_type
        );

        Ok(hospital.into())
    }

    /// Every curated facility in storage order
    pub async fn list(&self) -> Result<Vec<HospitalResponseDto>> {
        let query = format!("SELECT {} FROM hospitals ORDER BY id ASC", HOSPITAL_COLUMNS);

        let hospitals = sqlx::query_as::<_, Hospital>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list hospitals: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(hospitals.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<HospitalResponseDto> {
        let query = format!("SELECT {} FROM hospitals WHERE id = ?", HOSPITAL_COLUMNS);

        let hospital = sqlx::query_as::<_, Hospital>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| not_found(id))?;

        Ok(hospital.into())
    }

    /// Apply only the fields present in `dto`
    pub async fn update(&self, id: i64, dto: UpdateHospitalDto) -> Result<HospitalResponseDto> {
        let query = format!(
            r#"
            UPDATE hospitals
            SET name = COALESCE(?, name),
                type = COALESCE(?, type),
                latitude = COALESCE(?, latitude),
                longitude = COALESCE(?, longitude),
                address = COALESCE(?, address),
                phone = COALESCE(?, phone),
                opening_hours = COALESCE(?, opening_hours),
                website = COALESCE(?, website),
                description = COALESCE(?, description),
                is_featured = COALESCE(?, is_featured)
            WHERE id = ?
            RETURNING {}
            "#,
            HOSPITAL_COLUMNS
        );

        let hospital = sqlx::query_as::<_, Hospital>(&query)
            .bind(dto.name)
            .bind(dto.facility_type)
            .bind(dto.latitude)
            .bind(dto.longitude)
            .bind(dto.address)
            .bind(dto.phone)
            .bind(dto.opening_hours)
            .bind(dto.website)
            .bind(dto.description)
            .bind(dto.is_featured)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update hospital {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| not_found(id))?;

        tracing::info!("Hospital updated: id={}", hospital.id);

        Ok(hospital.into())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM hospitals WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete hospital {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Hospital deleted: id={}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_pool;

    fn city_general() -> NewHospital {
        NewHospital {
            name: "City General Hospital".to_string(),
            facility_type: "hospital".to_string(),
            latitude: 40.7589,
            longitude: -73.9851,
            address: "123 Medical Center Drive".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            opening_hours: "24/7".to_string(),
            website: "https://citygeneral.example.com".to_string(),
            description: "Full-service hospital".to_string(),
            is_featured: true,
        }
    }

    #[tokio::test]
    async fn test_update_phone_only_keeps_other_fields() {
        let service = HospitalService::new(test_pool().await);
        let created = service.create(city_general()).await.unwrap();

        let updated = service
            .update(
                created.db_id,
                UpdateHospitalDto {
                    phone: Some("+1 (555) 999-0000".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.phone, "+1 (555) 999-0000");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.facility_type, created.facility_type);
        assert_eq!(updated.latitude, created.latitude);
        assert_eq!(updated.longitude, created.longitude);
        assert_eq!(updated.address, created.address);
        assert_eq!(updated.opening_hours, created.opening_hours);
        assert_eq!(updated.website, created.website);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.is_featured, created.is_featured);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_can_clear_featured_flag() {
        let service = HospitalService::new(test_pool().await);
        let created = service.create(city_general()).await.unwrap();

        let updated = service
            .update(
                created.db_id,
                UpdateHospitalDto {
                    is_featured: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(!updated.is_featured);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let service = HospitalService::new(test_pool().await);

        let result = service.update(404, UpdateHospitalDto::default()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_leaves_table_unchanged() {
        let service = HospitalService::new(test_pool().await);
        service.create(city_general()).await.unwrap();

        let result = service.delete(9999).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let service = HospitalService::new(test_pool().await);
        let created = service.create(city_general()).await.unwrap();

        service.delete(created.db_id).await.unwrap();

        assert!(service.list().await.unwrap().is_empty());
        assert!(matches!(
            service.get_by_id(created.db_id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_in_storage_order() {
        let service = HospitalService::new(test_pool().await);
        let first = service.create(city_general()).await.unwrap();
        let second = service
            .create(NewHospital {
                name: "Downtown Medical Clinic".to_string(),
                facility_type: "clinic".to_string(),
                ..city_general()
            })
            .await
            .unwrap();

        let listed = service.list().await.unwrap();

        assert_eq!(
            listed.iter().map(|h| h.db_id).collect::<Vec<_>>(),
            vec![first.db_id, second.db_id]
        );
    }
}
