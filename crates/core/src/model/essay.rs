use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// A validated catalog entry: a title plus the external URL of the essay.
///
/// Records are immutable after catalog load and identified by their position
/// in the catalog sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EssayRecord {
    title: String,
    url: String,
}

/// Raw catalog entry as deserialized from the catalog resource, before
/// validation.
#[derive(Clone, Debug, Deserialize)]
pub struct EssayDraft {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EssayError {
    #[error("essay title is empty")]
    EmptyTitle,
    #[error("invalid essay URL: {raw}")]
    InvalidUrl { raw: String },
}

impl EssayDraft {
    /// Validate and normalize the draft into a catalog record.
    ///
    /// # Errors
    ///
    /// Returns `EssayError` if the title is blank or the URL does not parse.
    pub fn validate(self) -> Result<EssayRecord, EssayError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(EssayError::EmptyTitle);
        }

        let url = self.url.trim().to_string();
        if Url::parse(&url).is_err() {
            return Err(EssayError::InvalidUrl { raw: url });
        }

        Ok(EssayRecord { title, url })
    }
}

impl EssayRecord {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}
