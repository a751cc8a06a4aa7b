//! Host object kinds that get a QR panel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A host model whose detail page can carry a QR panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Device,
    Rack,
    Cable,
    Location,
    PowerPanel,
    PowerFeed,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown object kind `{0}`")]
pub struct UnknownKind(pub String);

impl ObjectKind {
    pub const ALL: [ObjectKind; 6] = [
        ObjectKind::Device,
        ObjectKind::Rack,
        ObjectKind::Cable,
        ObjectKind::Location,
        ObjectKind::PowerPanel,
        ObjectKind::PowerFeed,
    ];

    /// Settings key, also used in `pages`.
    pub fn key(self) -> &'static str {
        match self {
            ObjectKind::Device => "device",
            ObjectKind::Rack => "rack",
            ObjectKind::Cable => "cable",
            ObjectKind::Location => "location",
            ObjectKind::PowerPanel => "powerpanel",
            ObjectKind::PowerFeed => "powerfeed",
        }
    }

    /// Host model label the template extension attaches to.
    pub fn model(self) -> &'static str {
        match self {
            ObjectKind::Device => "dcim.device",
            ObjectKind::Rack => "dcim.rack",
            ObjectKind::Cable => "dcim.cable",
            ObjectKind::Location => "dcim.location",
            ObjectKind::PowerPanel => "dcim.powerpanel",
            ObjectKind::PowerFeed => "dcim.powerfeed",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ObjectKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("dcim.").unwrap_or(s);
        ObjectKind::ALL
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
