use serde::Deserialize;

/// One raw candidate as returned by the lookup source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddressRecord {
    pub id: String,
    pub street: String,
    pub postcode: String,
    pub city: String,
    /// Some sources echo a house number; normalization ignores it.
    #[serde(rename = "houseNumber", default)]
    pub house_number: Option<String>,
}

/// Response envelope from the lookup collaborator.
///
/// `status` is `"ok"` with `details` populated, or `"error"` with an
/// `errormessage` meant for the user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LookupEnvelope {
    pub status: String,
    #[serde(default)]
    pub details: Option<Vec<AddressRecord>>,
    #[serde(default)]
    pub errormessage: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupFailureKind {
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error")]
    Network,
    #[error("malformed lookup response")]
    MalformedResponse,
    #[error("no results")]
    NoResults,
}

/// A failed lookup. `errormessage` carries the collaborator's user-facing
/// text when the response supplied one; transport failures have none.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct LookupError {
    pub kind: LookupFailureKind,
    pub errormessage: Option<String>,
}

impl LookupError {
    pub(crate) fn new(kind: LookupFailureKind) -> Self {
        Self {
            kind,
            errormessage: None,
        }
    }

    pub(crate) fn with_message(kind: LookupFailureKind, message: Option<String>) -> Self {
        Self {
            kind,
            errormessage: message,
        }
    }
}
