use crate::challenge::validate_days;
use crate::errors::AppError;
use crate::models::ChallengeRecord;
use std::path::Path;
use tokio::fs;
use tracing::error;

/// Reads the record, separating "nothing stored" from "stored but unusable".
pub async fn read_record(path: &Path) -> Result<Option<ChallengeRecord>, AppError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let record: ChallengeRecord = serde_json::from_slice(&bytes)
        .map_err(|err| AppError::corrupt(format!("malformed challenge record: {err}")))?;
    validate_days(record.challenge_days)
        .map_err(|err| AppError::corrupt(format!("invalid challenge record: {}", err.message)))?;

    Ok(Some(record))
}

/// Permissive load: any unreadable record counts as no challenge in progress.
pub async fn load_record(path: &Path) -> Option<ChallengeRecord> {
    match read_record(path).await {
        Ok(record) => record,
        Err(err) => {
            error!("ignoring challenge record at {}: {err}", path.display());
            None
        }
    }
}

pub async fn persist_record(path: &Path, record: &ChallengeRecord) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(record).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

pub async fn clear_record(path: &Path) -> Result<(), AppError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}
