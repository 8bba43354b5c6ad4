use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

/// One of the three competing priorities. Declaration order is the canonical
/// order used for iteration and pair keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Good,
    Fast,
    Cheap,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [Attribute::Good, Attribute::Fast, Attribute::Cheap];

    pub fn name(self) -> &'static str {
        match self {
            Attribute::Good => "good",
            Attribute::Fast => "fast",
            Attribute::Cheap => "cheap",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Attribute::Good => "Good",
            Attribute::Fast => "Fast",
            Attribute::Cheap => "Cheap",
        }
    }

    pub(crate) const fn bit(self) -> u8 {
        match self {
            Attribute::Good => 0b001,
            Attribute::Fast => 0b010,
            Attribute::Cheap => 0b100,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Attribute::ALL
            .into_iter()
            .find(|attribute| attribute.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SelectionError::InvalidAttribute {
                input: s.to_string(),
            })
    }
}

/// Symbolic color token; the renderer decides what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentColor {
    Good,
    Fast,
    Cheap,
    Alert,
}

impl From<Attribute> for AccentColor {
    fn from(value: Attribute) -> Self {
        match value {
            Attribute::Good => AccentColor::Good,
            Attribute::Fast => AccentColor::Fast,
            Attribute::Cheap => AccentColor::Cheap,
        }
    }
}

/// Unordered pair of two distinct attributes.
///
/// There is one variant per pair, so `{Fast, Good}` and `{Good, Fast}` can only
/// ever produce [`ScenarioKey::GoodFast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKey {
    GoodFast,
    GoodCheap,
    FastCheap,
}

impl ScenarioKey {
    pub const ALL: [ScenarioKey; 3] = [
        ScenarioKey::GoodFast,
        ScenarioKey::GoodCheap,
        ScenarioKey::FastCheap,
    ];

    /// Returns `None` when both attributes are the same.
    pub fn from_pair(a: Attribute, b: Attribute) -> Option<Self> {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        match (lo, hi) {
            (Attribute::Good, Attribute::Fast) => Some(ScenarioKey::GoodFast),
            (Attribute::Good, Attribute::Cheap) => Some(ScenarioKey::GoodCheap),
            (Attribute::Fast, Attribute::Cheap) => Some(ScenarioKey::FastCheap),
            _ => None,
        }
    }

    /// Both members in canonical order.
    pub fn members(self) -> [Attribute; 2] {
        match self {
            ScenarioKey::GoodFast => [Attribute::Good, Attribute::Fast],
            ScenarioKey::GoodCheap => [Attribute::Good, Attribute::Cheap],
            ScenarioKey::FastCheap => [Attribute::Fast, Attribute::Cheap],
        }
    }

    /// The attribute given up by choosing this pair.
    pub fn sacrificed(self) -> Attribute {
        match self {
            ScenarioKey::GoodFast => Attribute::Cheap,
            ScenarioKey::GoodCheap => Attribute::Fast,
            ScenarioKey::FastCheap => Attribute::Good,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_attribute_names_case_insensitively() {
        assert_eq!("good".parse::<Attribute>().expect("good"), Attribute::Good);
        assert_eq!(" FAST ".parse::<Attribute>().expect("fast"), Attribute::Fast);
        assert_eq!("Cheap".parse::<Attribute>().expect("cheap"), Attribute::Cheap);
    }

    #[test]
    fn rejects_unknown_attribute_names() {
        let err = "quick".parse::<Attribute>().expect_err("unknown name");
        assert_eq!(
            err,
            SelectionError::InvalidAttribute {
                input: "quick".to_string()
            }
        );
        assert!("".parse::<Attribute>().is_err());
    }

    #[test]
    fn scenario_key_ignores_argument_order() {
        for key in ScenarioKey::ALL {
            let [a, b] = key.members();
            assert_eq!(ScenarioKey::from_pair(a, b), Some(key));
            assert_eq!(ScenarioKey::from_pair(b, a), Some(key));
        }
    }

    #[test]
    fn scenario_key_rejects_identical_attributes() {
        for attribute in Attribute::ALL {
            assert_eq!(ScenarioKey::from_pair(attribute, attribute), None);
        }
    }

    #[test]
    fn sacrificed_attribute_is_never_a_member() {
        for key in ScenarioKey::ALL {
            assert!(!key.members().contains(&key.sacrificed()));
        }
    }

    #[test]
    fn attributes_serialize_as_lowercase_names() {
        let json = serde_json::to_string(&Attribute::ALL).expect("serialize");
        assert_eq!(json, r#"["good","fast","cheap"]"#);
    }
}
