//! Generation request as collected by the CLI.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::names::{Industry, Style};

/// Longest description accepted, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

/// What the user asked for.
///
/// Tags are kept as typed so the record can echo them back; they are only
/// resolved to [`Industry`] / [`Style`] when generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Free-text project description.
    pub description: String,
    /// Industry tag, if one was given.
    pub industry: Option<String>,
    /// Style tag, if one was given.
    pub style: Option<String>,
}

impl GenerationRequest {
    /// Build a request. Blank tags are treated as absent.
    pub fn new(
        description: impl Into<String>,
        industry: Option<String>,
        style: Option<String>,
    ) -> Self {
        Self {
            description: description.into(),
            industry: industry.filter(|tag| !tag.trim().is_empty()),
            style: style.filter(|tag| !tag.trim().is_empty()),
        }
    }

    /// Check the description before handing the request to the generator.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let trimmed = self.description.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let len = trimmed.chars().count();
        if len > MAX_DESCRIPTION_CHARS {
            return Err(ValidationError::DescriptionTooLong {
                len,
                max: MAX_DESCRIPTION_CHARS,
            });
        }

        Ok(())
    }

    /// Resolved industry, or `None` when absent or unknown.
    pub fn industry(&self) -> Option<Industry> {
        self.industry.as_deref().and_then(Industry::from_tag)
    }

    /// Resolved style, or `None` when absent or unknown.
    pub fn style(&self) -> Option<Style> {
        self.style.as_deref().and_then(Style::from_tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty() {
        let request = GenerationRequest::new("   \n\t", None, None);
        assert_eq!(request.validate(), Err(ValidationError::EmptyDescription));
    }

    #[test]
    fn test_validate_too_long() {
        let request = GenerationRequest::new("é".repeat(MAX_DESCRIPTION_CHARS + 1), None, None);
        assert_eq!(
            request.validate(),
            Err(ValidationError::DescriptionTooLong {
                len: MAX_DESCRIPTION_CHARS + 1,
                max: MAX_DESCRIPTION_CHARS,
            })
        );
    }

    #[test]
    fn test_validate_ok() {
        let request = GenerationRequest::new("A task app for teams", None, None);
        assert!(request.validate().is_ok());

        let at_limit = GenerationRequest::new("a".repeat(MAX_DESCRIPTION_CHARS), None, None);
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_blank_tags_dropped() {
        let request = GenerationRequest::new("x", Some("  ".into()), Some(String::new()));
        assert_eq!(request.industry, None);
        assert_eq!(request.style, None);
    }

    #[test]
    fn test_tag_resolution() {
        let request =
            GenerationRequest::new("x", Some("Healthcare".into()), Some("space-age".into()));
        assert_eq!(request.industry(), Some(Industry::Healthcare));
        assert_eq!(request.style(), None);
        assert_eq!(request.style.as_deref(), Some("space-age"));
    }
}
