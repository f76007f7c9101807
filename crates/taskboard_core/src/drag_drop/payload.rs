//! Transient drag payload channel.

use std::fmt::{Display, Formatter};

/// Payload kind used for project ids.
pub const PLAIN_TEXT: &str = "text/plain";

/// Operations a drag source allows at the drop site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
}

impl Display for DropEffect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Link => "link",
        })
    }
}

/// String-keyed data carried by one drag gesture.
///
/// Entries keep the order in which their kinds were first written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    pub effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `kind`, replacing any previous value.
    pub fn set_data(&mut self, kind: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| existing == kind) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((kind.to_string(), value)),
        }
    }

    /// Returns the value stored under `kind`, or an empty string.
    pub fn get_data(&self, kind: &str) -> &str {
        self.entries
            .iter()
            .find(|(existing, _)| existing == kind)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// Payload kinds in write order.
    pub fn types(&self) -> Vec<&str> {
        self.entries.iter().map(|(kind, _)| kind.as_str()).collect()
    }
}

/// One drag gesture event as seen by sources and targets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DragEvent {
    pub data_transfer: Option<DataTransfer>,
    default_prevented: bool,
}

impl DragEvent {
    /// Creates an event carrying an empty payload channel.
    pub fn new() -> Self {
        Self {
            data_transfer: Some(DataTransfer::new()),
            default_prevented: false,
        }
    }

    /// Creates an event with no payload channel at all.
    pub fn without_transfer() -> Self {
        Self::default()
    }

    /// Suppresses the platform default, which rejects drops.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Kind of the first payload entry, if any.
    pub fn first_payload_kind(&self) -> Option<&str> {
        self.data_transfer
            .as_ref()
            .and_then(|transfer| transfer.types().first().copied())
    }

    /// Plain-text payload, or an empty string when absent.
    pub fn plain_text(&self) -> &str {
        self.data_transfer
            .as_ref()
            .map(|transfer| transfer.get_data(PLAIN_TEXT))
            .unwrap_or("")
    }
}
