use thiserror::Error;

/// Grouping label applied to sessions for navigation.
///
/// Sessions without a usable label fall into [`Category::UNCATEGORIZED`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    pub const UNCATEGORIZED: &'static str = "Uncategorized";

    /// Create a validated category label (trimmed, non-empty).
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyName` if the label is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, CategoryError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn uncategorized() -> Self {
        Self(Self::UNCATEGORIZED.to_string())
    }

    /// Map an optional raw label onto a category, bucketing blanks as uncategorized.
    #[must_use]
    pub fn from_optional(value: Option<&str>) -> Self {
        value
            .and_then(|raw| Self::new(raw).ok())
            .unwrap_or_else(Self::uncategorized)
    }

    #[must_use]
    pub fn is_uncategorized(&self) -> bool {
        self.0 == Self::UNCATEGORIZED
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("category name cannot be empty")]
    EmptyName,
}
