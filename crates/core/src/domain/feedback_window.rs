use chrono::{DateTime, NaiveDate, Utc};

use super::DomainError;

/// An end date as the admin client sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndDateInput {
    /// RFC 3339 timestamp or `YYYY-MM-DD`.
    Text(String),
    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
    /// Any other JSON value, kept verbatim for the error message.
    Unsupported(String),
}

impl EndDateInput {
    /// `None` when the input is blank.
    fn resolve(&self) -> Result<Option<DateTime<Utc>>, DomainError> {
        match self {
            Self::Text(raw) if raw.trim().is_empty() => Ok(None),
            Self::Text(raw) => parse_end_date(raw.trim()).map(Some),
            Self::EpochMillis(millis) => DateTime::from_timestamp_millis(*millis)
                .map(Some)
                .ok_or_else(|| DomainError::InvalidEndDate(millis.to_string())),
            Self::Unsupported(raw) => Err(DomainError::InvalidEndDate(raw.clone())),
        }
    }
}

/// University-wide switch that opens or closes course feedback collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedbackWindow {
    pub is_active: bool,
    pub end_date: Option<DateTime<Utc>>,
}

impl FeedbackWindow {
    /// Validates an administrative toggle and returns the resulting window.
    ///
    /// Opening the window needs an end date strictly after `now`. Closing it
    /// ignores `end_date` and keeps whatever end date was last set.
    pub fn toggle(
        &self,
        active: bool,
        end_date: Option<&EndDateInput>,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if !active {
            return Ok(Self {
                is_active: false,
                end_date: self.end_date,
            });
        }

        let end_date = end_date
            .map(EndDateInput::resolve)
            .transpose()?
            .flatten()
            .ok_or(DomainError::EndDateRequired)?;

        if end_date <= now {
            return Err(DomainError::EndDateNotInFuture);
        }

        Ok(Self {
            is_active: true,
            end_date: Some(end_date),
        })
    }
}

/// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD` date, which is
/// taken as midnight UTC.
pub fn parse_end_date(raw: &str) -> Result<DateTime<Utc>, DomainError> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| DomainError::InvalidEndDate(raw.to_string()))
}
