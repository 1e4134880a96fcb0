//! Proof-of-work attachments and the per-task attachment ledger.
//!
//! The ledger is status-agnostic: it never inspects the owning task. Gating
//! uploads on completed tasks happens in [`super::TaskCard`].

use super::TaskDomainError;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const SIZE_BASE: u128 = 1024;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Identifier of one uploaded attachment.
///
/// Fresh identifiers are v4 UUIDs; identifiers decoded from a backend are
/// kept as opaque non-blank strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AttachmentId(String);

impl AttachmentId {
    /// Creates a new random attachment identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates an attachment identifier from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }

    /// Creates an attachment identifier from an opaque value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyAttachmentId`] when the value is
    /// blank.
    pub fn parse(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyAttachmentId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AttachmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<String> for AttachmentId {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<AttachmentId> for String {
    fn from(id: AttachmentId) -> Self {
        id.0
    }
}

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw description of a file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Original filename.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type reported by the picker; may be empty.
    pub mime_type: String,
}

impl FileDescriptor {
    /// Creates a file descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }
}

/// Metadata for one uploaded proof file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    id: AttachmentId,
    name: String,
    size: u64,
    #[serde(rename = "type")]
    mime_type: String,
    uploaded_at: String,
}

impl Attachment {
    fn from_descriptor(id: AttachmentId, file: FileDescriptor, uploaded_at: String) -> Self {
        Self {
            id,
            name: file.name,
            size: file.size,
            mime_type: file.mime_type,
            uploaded_at,
        }
    }

    /// Returns the attachment identifier.
    #[must_use]
    pub const fn id(&self) -> &AttachmentId {
        &self.id
    }

    /// Returns the original filename.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the size in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns the MIME type.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the human-readable upload timestamp.
    #[must_use]
    pub fn uploaded_at(&self) -> &str {
        &self.uploaded_at
    }

    /// Returns the size formatted for display.
    #[must_use]
    pub fn display_size(&self) -> String {
        format_size(self.size)
    }
}

/// Ordered collection of attachments scoped to one task view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttachmentLedger {
    entries: Vec<Attachment>,
}

impl AttachmentLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a ledger seeded with previously uploaded attachments.
    #[must_use]
    pub fn from_attachments(attachments: impl IntoIterator<Item = Attachment>) -> Self {
        let mut ledger = Self::new();
        for attachment in attachments {
            if ledger.get(attachment.id()).is_none() {
                ledger.entries.push(attachment);
            }
        }
        ledger
    }

    /// Appends one attachment per file, in input order, and returns the
    /// number added.
    ///
    /// An empty batch is a silent no-op returning `0`.
    pub fn add_files(
        &mut self,
        files: impl IntoIterator<Item = FileDescriptor>,
        clock: &impl Clock,
    ) -> usize {
        let uploaded_at = clock.utc().format(TIMESTAMP_FORMAT).to_string();
        let mut added = 0;
        for file in files {
            let id = self.fresh_id();
            self.entries
                .push(Attachment::from_descriptor(id, file, uploaded_at.clone()));
            added += 1;
        }
        added
    }

    /// Removes the attachment with the given identifier.
    ///
    /// Returns `false` when no such attachment exists; this is not an error.
    pub fn remove_file(&mut self, id: &AttachmentId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|attachment| attachment.id() != id);
        self.entries.len() != before
    }

    /// Looks up an attachment by identifier.
    #[must_use]
    pub fn get(&self, id: &AttachmentId) -> Option<&Attachment> {
        self.entries.iter().find(|attachment| attachment.id() == id)
    }

    /// Iterates attachments in upload order.
    pub fn iter(&self) -> impl Iterator<Item = &Attachment> {
        self.entries.iter()
    }

    /// Returns the number of attachments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the ledger holds no attachments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all attachment sizes in bytes.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.entries
            .iter()
            .fold(0_u64, |total, attachment| total.saturating_add(attachment.size()))
    }

    fn fresh_id(&self) -> AttachmentId {
        loop {
            let candidate = AttachmentId::new();
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

/// Formats a byte count with base-1024 units rounded to two decimals.
///
/// Zero is special-cased as `"0 Bytes"`. Values beyond the gigabyte range
/// stay expressed in GB.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }

    let value = u128::from(bytes);
    let mut unit_index = 0_usize;
    let mut divisor = 1_u128;
    while unit_index + 1 < SIZE_UNITS.len() && value >= divisor * SIZE_BASE {
        divisor *= SIZE_BASE;
        unit_index += 1;
    }

    // Hundredths of the unit, rounded half-up.
    let hundredths = (value * 100 + divisor.div_euclid(2)).div_euclid(divisor);
    let whole = hundredths.div_euclid(100);
    let fraction = hundredths.rem_euclid(100);
    let unit = SIZE_UNITS.get(unit_index).copied().unwrap_or("GB");

    if fraction == 0 {
        format!("{whole} {unit}")
    } else if fraction.rem_euclid(10) == 0 {
        format!("{whole}.{} {unit}", fraction.div_euclid(10))
    } else {
        format!("{whole}.{fraction:02} {unit}")
    }
}
