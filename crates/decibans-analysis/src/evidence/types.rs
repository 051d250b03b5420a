//! Qualitative evidence labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Strength of evidence carried by a Bayes factor, on Jeffreys' scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceStrength {
    /// 0 < K < 1.
    SupportsAlternative,
    /// K == 1.
    Equal,
    /// 1 < K ≤ 3.2.
    BarelyWorthMentioning,
    /// 3.2 < K ≤ 10.
    Substantial,
    /// 10 < K ≤ 100.
    Strong,
    /// K > 100.
    Decisive,
}

impl EvidenceStrength {
    pub const ALL: [EvidenceStrength; 6] = [
        Self::SupportsAlternative,
        Self::Equal,
        Self::BarelyWorthMentioning,
        Self::Substantial,
        Self::Strong,
        Self::Decisive,
    ];

    /// Human-readable interpretation.
    pub fn description(&self) -> &'static str {
        match self {
            Self::SupportsAlternative => "Evidence supports the alternative model.",
            Self::Equal => "The evidence supports both models equally.",
            Self::BarelyWorthMentioning => "Evidence is barely worth mentioning.",
            Self::Substantial => "Evidence is substantial.",
            Self::Strong => "Evidence is strong.",
            Self::Decisive => "Evidence is decisive.",
        }
    }

    /// Short snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SupportsAlternative => "supports_alternative",
            Self::Equal => "equal",
            Self::BarelyWorthMentioning => "barely_worth_mentioning",
            Self::Substantial => "substantial",
            Self::Strong => "strong",
            Self::Decisive => "decisive",
        }
    }

    /// True when the evidence favors the hypothesis over the alternative.
    pub fn favors_hypothesis(&self) -> bool {
        *self > Self::Equal
    }
}

impl fmt::Display for EvidenceStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
