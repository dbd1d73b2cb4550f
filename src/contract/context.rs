//! Per-invocation execution context
//!
//! Everything the host would otherwise expose as ambient state (chain
//! height, trigger, funding sender, witnesses) is passed in explicitly.

use std::fmt;
use std::str::FromStr;

use super::identity::Identity;

/// Why the host is running the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerType {
    /// Deciding whether a spend of contract-held assets is allowed.
    Verification,
    /// Ordinary named-operation call.
    Application,
    /// Any other host trigger; always answered with `false`.
    Other(u8),
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verification => write!(f, "verification"),
            Self::Application => write!(f, "application"),
            Self::Other(code) => write!(f, "other({:#04x})", code),
        }
    }
}

impl FromStr for TriggerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verification" => Ok(Self::Verification),
            "application" => Ok(Self::Application),
            other => other
                .strip_prefix("0x")
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .map(Self::Other)
                .ok_or_else(|| {
                    format!(
                        "Invalid trigger: '{}'. Valid: verification, application, 0x<byte>",
                        s
                    )
                }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    pub height: u64,
    pub trigger: TriggerType,
    /// Identity behind the invocation's first funding reference.
    pub sender: Option<Identity>,
    pub witnesses: Vec<Identity>,
}

impl ExecutionContext {
    pub fn new(trigger: TriggerType, height: u64) -> Self {
        Self {
            height,
            trigger,
            sender: None,
            witnesses: Vec::new(),
        }
    }

    pub fn application(height: u64) -> Self {
        Self::new(TriggerType::Application, height)
    }

    pub fn verification() -> Self {
        Self::new(TriggerType::Verification, 0)
    }

    pub fn with_sender(mut self, sender: Identity) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn with_witness(mut self, witness: Identity) -> Self {
        self.witnesses.push(witness);
        self
    }

    /// Whether `identity` authorized this invocation.
    pub fn check_witness(&self, identity: &Identity) -> bool {
        self.witnesses.iter().any(|w| w == identity)
    }
}
