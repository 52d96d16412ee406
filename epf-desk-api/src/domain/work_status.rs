use serde::{Deserialize, Deserializer, Serializer};
use std::str::FromStr;

/// Lifecycle stage of a customer record.
///
/// Only the canonical spellings parse into the named variants. Anything else
/// the backend sends is kept verbatim in `Other` so it round-trips unchanged;
/// [`WorkStatus::canonical`] still reads "pending" and "updated" in any
/// letter case as the queue statuses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WorkStatus {
    Pending,
    Updated,
    InProgress,
    Completed,
    Other(String),
}

impl WorkStatus {
    pub fn as_str(&self) -> &str {
        match self {
            WorkStatus::Pending => "Pending",
            WorkStatus::Updated => "Updated",
            WorkStatus::InProgress => "In Progress",
            WorkStatus::Completed => "Completed",
            WorkStatus::Other(raw) => raw.as_str(),
        }
    }

    /// The recognized status behind this value, ignoring how it was spelled.
    pub fn canonical(&self) -> WorkStatus {
        match self {
            WorkStatus::Other(raw) if raw.eq_ignore_ascii_case("pending") => WorkStatus::Pending,
            WorkStatus::Other(raw) if raw.eq_ignore_ascii_case("updated") => WorkStatus::Updated,
            other => other.clone(),
        }
    }

    /// Statuses listed by the pending intake queue.
    pub fn is_pending_queue(&self) -> bool {
        matches!(self.canonical(), WorkStatus::Pending | WorkStatus::Updated)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, WorkStatus::Completed)
    }
}

impl std::fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(WorkStatus::Pending),
            "Updated" => Ok(WorkStatus::Updated),
            "In Progress" => Ok(WorkStatus::InProgress),
            "Completed" => Ok(WorkStatus::Completed),
            other => Ok(WorkStatus::Other(other.to_string())),
        }
    }
}

pub fn serialize_optional_work_status<S>(
    value: &Option<WorkStatus>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(status) => serializer.serialize_str(status.as_str()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize_optional_work_status<'de, D>(
    deserializer: D,
) -> Result<Option<WorkStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value
        .filter(|raw| !raw.is_empty())
        .map(|raw| match WorkStatus::from_str(&raw) {
            Ok(status) => status,
            Err(never) => match never {},
        }))
}
