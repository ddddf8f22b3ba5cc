use services::CatalogError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    SessionsUnavailable,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Unknown => "Something went wrong. Please try again.",
            Self::SessionsUnavailable => "Sessions could not be loaded.",
        }
    }
}

impl From<&CatalogError> for ViewError {
    fn from(err: &CatalogError) -> Self {
        match err {
            CatalogError::Storage(_) => Self::SessionsUnavailable,
            _ => Self::Unknown,
        }
    }
}
