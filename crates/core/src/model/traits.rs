use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while parsing trait codes or building a priority order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TraitError {
    #[error("unknown trait code: {0:?}")]
    UnknownCode(String),

    #[error("trait priority must list {expected} traits, got {len}")]
    PriorityLength { expected: usize, len: usize },

    #[error("trait {0} appears more than once in the priority order")]
    DuplicateInPriority(TraitId),
}

//
// ─── TRAIT ID ─────────────────────────────────────────────────────────────────
//

/// One of the four measured personality traits.
///
/// Serialized as its single-letter code (`"E"`, `"A"`, `"O"`, `"C"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TraitId {
    #[serde(rename = "E")]
    Extraversion,
    #[serde(rename = "A")]
    Agreeableness,
    #[serde(rename = "O")]
    Openness,
    #[serde(rename = "C")]
    Conscientiousness,
}

impl TraitId {
    pub const COUNT: usize = 4;

    /// Every trait, in declaration order.
    pub const ALL: [TraitId; Self::COUNT] = [
        TraitId::Extraversion,
        TraitId::Agreeableness,
        TraitId::Openness,
        TraitId::Conscientiousness,
    ];

    /// Dense index in `0..COUNT`, stable across the process.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            TraitId::Extraversion => 0,
            TraitId::Agreeableness => 1,
            TraitId::Openness => 2,
            TraitId::Conscientiousness => 3,
        }
    }

    #[must_use]
    pub const fn code(self) -> char {
        match self {
            TraitId::Extraversion => 'E',
            TraitId::Agreeableness => 'A',
            TraitId::Openness => 'O',
            TraitId::Conscientiousness => 'C',
        }
    }

    /// Parses a single-letter trait code. Case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `TraitError::UnknownCode` for anything but `E`, `A`, `O` or `C`.
    pub fn from_code(code: char) -> Result<Self, TraitError> {
        match code.to_ascii_uppercase() {
            'E' => Ok(TraitId::Extraversion),
            'A' => Ok(TraitId::Agreeableness),
            'O' => Ok(TraitId::Openness),
            'C' => Ok(TraitId::Conscientiousness),
            _ => Err(TraitError::UnknownCode(code.to_string())),
        }
    }
}

impl fmt::Display for TraitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for TraitId {
    type Err = TraitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Self::from_code(code),
            _ => Err(TraitError::UnknownCode(trimmed.to_string())),
        }
    }
}

//
// ─── TRAIT PRIORITY ───────────────────────────────────────────────────────────
//

/// Total order over the four traits, used only to break ties between equal
/// top scores. Earlier traits win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraitPriority([TraitId; TraitId::COUNT]);

impl TraitPriority {
    /// Builds a priority order from a permutation of all four traits.
    ///
    /// # Errors
    ///
    /// Returns `TraitError::PriorityLength` if the slice does not hold exactly
    /// four traits, or `TraitError::DuplicateInPriority` if a trait repeats.
    pub fn new(order: &[TraitId]) -> Result<Self, TraitError> {
        let ordered: [TraitId; TraitId::COUNT] =
            order.try_into().map_err(|_| TraitError::PriorityLength {
                expected: TraitId::COUNT,
                len: order.len(),
            })?;

        let mut seen = [false; TraitId::COUNT];
        for trait_id in ordered {
            if seen[trait_id.index()] {
                return Err(TraitError::DuplicateInPriority(trait_id));
            }
            seen[trait_id.index()] = true;
        }

        Ok(Self(ordered))
    }

    /// Highest-priority trait; the winner when every score is equal.
    #[must_use]
    pub fn first(&self) -> TraitId {
        self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = TraitId> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[TraitId] {
        &self.0
    }
}

impl Default for TraitPriority {
    fn default() -> Self {
        Self(TraitId::ALL)
    }
}

impl fmt::Display for TraitPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for trait_id in self.0 {
            write!(f, "{trait_id}")?;
        }
        Ok(())
    }
}

impl FromStr for TraitPriority {
    type Err = TraitError;

    /// Parses a compact order such as `"EAOC"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let order = s
            .trim()
            .chars()
            .map(TraitId::from_code)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&order)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_parsing() {
        for trait_id in TraitId::ALL {
            let parsed: TraitId = trait_id.to_string().parse().unwrap();
            assert_eq!(parsed, trait_id);
        }
        assert_eq!("o".parse::<TraitId>().unwrap(), TraitId::Openness);
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = "X".parse::<TraitId>().unwrap_err();
        assert_eq!(err, TraitError::UnknownCode("X".into()));
        assert!("EA".parse::<TraitId>().is_err());
    }

    #[test]
    fn indices_are_dense() {
        for (i, trait_id) in TraitId::ALL.iter().enumerate() {
            assert_eq!(trait_id.index(), i);
        }
    }

    #[test]
    fn serde_uses_single_letter_codes() {
        let json = serde_json::to_string(&TraitId::Conscientiousness).unwrap();
        assert_eq!(json, "\"C\"");
        let parsed: TraitId = serde_json::from_str("\"A\"").unwrap();
        assert_eq!(parsed, TraitId::Agreeableness);
    }

    #[test]
    fn default_priority_is_eaoc() {
        let priority = TraitPriority::default();
        assert_eq!(priority.to_string(), "EAOC");
        assert_eq!(priority.first(), TraitId::Extraversion);
    }

    #[test]
    fn priority_parses_permutations() {
        let priority: TraitPriority = "coae".parse().unwrap();
        assert_eq!(
            priority.as_slice(),
            &[
                TraitId::Conscientiousness,
                TraitId::Openness,
                TraitId::Agreeableness,
                TraitId::Extraversion,
            ]
        );
    }

    #[test]
    fn priority_rejects_duplicates_and_short_orders() {
        assert_eq!(
            "EAOE".parse::<TraitPriority>().unwrap_err(),
            TraitError::DuplicateInPriority(TraitId::Extraversion)
        );
        assert_eq!(
            "EAO".parse::<TraitPriority>().unwrap_err(),
            TraitError::PriorityLength {
                expected: 4,
                len: 3
            }
        );
    }
}
