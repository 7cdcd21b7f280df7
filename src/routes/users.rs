use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use std::path::Path as StdPath;
use tokio::fs;
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::user::UserProfile;
use crate::AppState;

async fn save_photo_file(filename: &str, data: &Bytes) -> Result<String> {
    let ext = StdPath::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|| "bin".to_string());

    let allowed_exts = ["jpg", "jpeg", "png", "webp", "gif"];
    if !allowed_exts.contains(&ext.as_str()) {
        return Err(Error::BadRequest(format!(
            "File type .{} is not allowed, only images are accepted",
            ext
        )));
    }

    if (ext == "jpg" || ext == "jpeg") && !data.starts_with(&[0xFF, 0xD8]) {
        return Err(Error::BadRequest("Invalid JPEG file content".into()));
    }
    if ext == "png" && !data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        return Err(Error::BadRequest("Invalid PNG file content".into()));
    }

    let upload_dir = crate::config::get_config().upload_dir.clone();
    fs::create_dir_all(&upload_dir)
        .await
        .map_err(|e| Error::Internal(e.to_string()))?;

    let safe_filename = format!("photo-{}.{}", uuid::Uuid::new_v4(), ext);
    let file_path = format!("{}/{}", upload_dir, safe_filename);

    fs::write(&file_path, data).await.map_err(|e| {
        tracing::error!("Failed to write photo file: {}", e);
        Error::Internal(format!("Failed to save file: {}", e))
    })?;

    Ok(file_path)
}

/// POST /api/users — capture the profile form plus the photo upload and
/// register the test taker.
pub async fn register_user(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let mut name = String::new();
    let mut country = String::new();
    let mut age: i32 = 0;
    let mut school = String::new();
    let mut gender = None;
    let mut photo_path = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to get next field: {}", e);
        Error::BadRequest(e.to_string())
    })? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "name" => name = field.text().await.unwrap_or_default(),
            "country" => country = field.text().await.unwrap_or_default(),
            "age" => {
                let raw = field.text().await.unwrap_or_default();
                age = raw
                    .trim()
                    .parse()
                    .map_err(|_| Error::BadRequest(format!("Invalid age: {}", raw)))?;
            }
            "school" => school = field.text().await.unwrap_or_default(),
            "gender" => {
                let value = field.text().await.unwrap_or_default();
                if !value.is_empty() {
                    gender = Some(value);
                }
            }
            "photoFile" => {
                let filename = field.file_name().unwrap_or("photo.bin").to_string();
                let data = field.bytes().await.map_err(|e| {
                    tracing::error!("Failed to read photo bytes: {}", e);
                    Error::BadRequest("Failed to read file upload".into())
                })?;
                if !data.is_empty() {
                    photo_path = Some(save_photo_file(&filename, &data).await?);
                }
            }
            _ => {}
        }
    }

    let profile = UserProfile {
        name,
        country,
        age,
        school,
        gender,
    };
    profile.validate()?;

    let photo_path = photo_path.ok_or_else(|| Error::BadRequest("No photo uploaded".into()))?;

    let user = state.storage.create_user(profile, photo_path);
    tracing::info!(user_id = user.id, "registered test taker");

    Ok((StatusCode::CREATED, Json(user)))
}
