use sea_orm::{DbErr, SqlErr};
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

pub mod postgres;

/// Maps a failed insert or update. Unique violations surface as
/// [`CoreError::DuplicateField`], everything else is logged.
pub fn map_write_error(context: &str, e: DbErr) -> CoreError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            error!("{}: duplicate value ({})", context, detail);
            CoreError::DuplicateField
        }
        _ => {
            error!("{}: {}", context, e);
            CoreError::InternalServerError
        }
    }
}
