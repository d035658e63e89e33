//! Library error type

use crate::logic::sections::SectionId;

#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    /// Input outside a function's contract (e.g. a project without images)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The host could not report geometry for a section
    #[error("no geometry for section '{0}'")]
    MissingElement(SectionId),

    #[error("failed to parse YAML portfolio data: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON portfolio data: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_names_section() {
        let err = PortfolioError::MissingElement(SectionId::Experience);
        assert_eq!(err.to_string(), "no geometry for section 'experience'");
    }

    #[test]
    fn test_invalid_input_message() {
        let err = PortfolioError::InvalidInput("project 7 has no images".to_string());
        assert_eq!(err.to_string(), "invalid input: project 7 has no images");
    }
}
