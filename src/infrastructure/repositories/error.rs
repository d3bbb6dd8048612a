use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation => {
                DomainError::Validation("unique constraint violated".into())
            }
            ErrorKind::ForeignKeyViolation => {
                DomainError::Validation("referenced record not found".into())
            }
            ErrorKind::CheckViolation => {
                DomainError::Validation("check constraint violated".into())
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        _ => DomainError::Persistence(err.to_string()),
    }
}

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if matches!(db_err.kind(), ErrorKind::UniqueViolation))
}

pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if matches!(db_err.kind(), ErrorKind::ForeignKeyViolation))
}

pub fn to_i64(value: u64, what: &str) -> Result<i64, DomainError> {
    i64::try_from(value).map_err(|_| DomainError::Validation(format!("{what} out of range")))
}

pub fn to_u64(value: i64, what: &str) -> Result<u64, DomainError> {
    u64::try_from(value).map_err(|_| DomainError::Persistence(format!("negative {what} in store")))
}
