//! Wire protocol for dashboard push updates.
//!
//! Every frame the server emits is a JSON text message of the form
//! `{"z":"set","variables":{...}}`. Only two variable shapes exist: the
//! online/offline status pair and the tick counter. There is no
//! client-to-server application protocol.

use serde::{Deserialize, Serialize};

/// Message kind marker carried by every frame.
pub const KIND_SET: &str = "set";

/// A single push update as serialized onto the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub z: String,
    pub variables: Variables,
}

/// The variable assignments carried by an [`Update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Variables {
    Status {
        #[serde(rename = "statusColor")]
        status_color: StatusColor,
        #[serde(rename = "statusText")]
        status_text: StatusText,
    },
    Counter {
        counting: u64,
    },
}

/// Lamp color shown by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Red,
    Green,
}

/// Lamp label shown by the dashboard. Serialized capitalized, as the
/// variant names are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusText {
    Offline,
    Online,
}

impl Update {
    /// Status update for the watched file being present (`online = true`)
    /// or absent.
    pub fn status(online: bool) -> Self {
        let (status_color, status_text) = if online {
            (StatusColor::Green, StatusText::Online)
        } else {
            (StatusColor::Red, StatusText::Offline)
        };
        Self {
            z: KIND_SET.to_string(),
            variables: Variables::Status {
                status_color,
                status_text,
            },
        }
    }

    /// Counter update carrying the current tick count.
    pub fn counter(counting: u64) -> Self {
        Self {
            z: KIND_SET.to_string(),
            variables: Variables::Counter { counting },
        }
    }
}
