//! Video repository.

use chrono::Utc;

use tutor_core::entities::Video;
use tutor_core::enums::EntityType;
use tutor_core::ids::PREFIX_VIDEO;

use crate::error::DatabaseError;
use crate::helpers::{WithEntity, not_found, parse_datetime};
use crate::service::TutorService;
use crate::updates::video::VideoUpdate;

const SELECT_COLS: &str = "id, title, video_url, created_at, updated_at";

fn row_to_video(row: &libsql::Row) -> Result<Video, DatabaseError> {
    Ok(Video {
        id: row.get(0)?,
        title: row.get(1)?,
        video_url: row.get(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
        updated_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl TutorService {
    pub async fn create_video(&self, title: &str, video_url: &str) -> Result<Video, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_VIDEO).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO videos ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5)"),
                libsql::params![
                    id.as_str(),
                    title,
                    video_url,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await
            .with_entity(EntityType::Video, &id)?;

        Ok(Video {
            id,
            title: title.to_string(),
            video_url: video_url.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_video(&self, id: &str) -> Result<Video, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM videos WHERE id = ?1"), [id])
            .await
            .with_entity(EntityType::Video, id)?;
        let row = rows
            .next()
            .await
            .with_entity(EntityType::Video, id)?
            .ok_or_else(|| not_found(EntityType::Video, id))?;
        row_to_video(&row)
    }

    pub async fn update_video(&self, id: &str, update: VideoUpdate) -> Result<Video, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(title) = update.title {
            sets.push(format!("title = ?{idx}"));
            params.push(title.into());
            idx += 1;
        }
        if let Some(video_url) = update.video_url {
            sets.push(format!("video_url = ?{idx}"));
            params.push(video_url.into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_video(id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        params.push(id.into());
        let sql = format!("UPDATE videos SET {} WHERE id = ?{idx}", sets.join(", "));
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await
            .with_entity(EntityType::Video, id)?;
        if changed == 0 {
            return Err(not_found(EntityType::Video, id));
        }

        self.get_video(id).await
    }

    pub async fn delete_video(&self, id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM videos WHERE id = ?1", [id])
            .await
            .with_entity(EntityType::Video, id)?;
        if changed == 0 {
            return Err(not_found(EntityType::Video, id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use crate::updates::video::VideoUpdateBuilder;

    #[tokio::test]
    async fn create_video_roundtrip() {
        let svc = test_service().await;
        let video = svc
            .create_video("Intro", "https://videos.example/intro")
            .await
            .unwrap();
        assert!(video.id.starts_with("vid-"));

        let fetched = svc.get_video(&video.id).await.unwrap();
        assert_eq!(fetched.video_url, "https://videos.example/intro");
    }

    #[tokio::test]
    async fn update_video_url() {
        let svc = test_service().await;
        let video = svc.create_video("Intro", "https://a").await.unwrap();
        let update = VideoUpdateBuilder::new().video_url("https://b").build();
        let updated = svc.update_video(&video.id, update).await.unwrap();
        assert_eq!(updated.video_url, "https://b");
        assert_eq!(updated.title, "Intro");
    }

    #[tokio::test]
    async fn delete_video() {
        let svc = test_service().await;
        let video = svc.create_video("Intro", "https://a").await.unwrap();
        svc.delete_video(&video.id).await.unwrap();
        assert!(matches!(
            svc.get_video(&video.id).await,
            Err(DatabaseError::NotFound { entity: EntityType::Video, .. })
        ));
    }
}
