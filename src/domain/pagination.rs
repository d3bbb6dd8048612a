// src/domain/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Zero-based page index plus a page size of at least one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> DomainResult<Self> {
        if size == 0 {
            return Err(DomainError::Validation(
                "page size must be at least 1".into(),
            ));
        }
        Ok(Self { page, size })
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn size(&self) -> u32 {
        self.size
    }

    pub const fn offset(&self) -> u64 {
        self.page as u64 * self.size as u64
    }

    pub const fn limit(&self) -> u64 {
        self.size as u64
    }

    /// `ceil(total / size)`.
    pub fn total_pages(&self, total: u64) -> u32 {
        let pages = total.div_ceil(u64::from(self.size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Anything other than a case-insensitive `desc` sorts ascending,
    /// including blank and absent values.
    pub fn from_filter(filter: Option<&str>) -> Self {
        match filter {
            Some(value) if value.eq_ignore_ascii_case("desc") => Self::Descending,
            _ => Self::Ascending,
        }
    }

    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}
