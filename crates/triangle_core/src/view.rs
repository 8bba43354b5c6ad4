//! Renderer-agnostic display state derived from a [`SelectionSet`].

use std::borrow::Cow;

use serde::Serialize;

use crate::{
    domain::ScenarioKey,
    scenario::{Example, ScenarioTable, FINITE_RESOURCES},
    selection::SelectionSet,
};

pub const PROMPT_TITLE: &str = "Select your priorities above";
pub const PROMPT_DESCRIPTION: &str =
    "Choose up to two attributes to see what trade-offs you'll need to make.";
pub const SINGLE_DESCRIPTION: &str =
    "Select one more attribute to see the trade-offs and real-world implications.";
pub const IMPOSSIBLE_TITLE: &str = "That's Impossible!";
pub const IMPOSSIBLE_DESCRIPTION: &str = "You cannot optimize for all three attributes simultaneously. This is the fundamental constraint of the project triangle.";

/// Fixed text for a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
}

/// Shown when a third attribute is rejected.
pub const LIMIT_WARNING: Notice = Notice {
    title: "Maximum 2 Selections!",
    description: "The triangle principle: you can only optimize for two attributes at once.",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum Stage {
    Empty,
    Single,
    Achievable(ScenarioKey),
    Impossible,
}

/// What the middle of the triangle diagram shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CenterBadge {
    Impossible,
    Achievable,
    Overloaded,
}

impl CenterBadge {
    pub fn icon(self) -> &'static str {
        match self {
            CenterBadge::Achievable => "✓",
            CenterBadge::Impossible | CenterBadge::Overloaded => "❌",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CenterBadge::Achievable => "Achievable",
            CenterBadge::Impossible | CenterBadge::Overloaded => "Impossible",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub stage: Stage,
    pub title: Cow<'static, str>,
    pub description: &'static str,
    pub examples: &'static [Example],
    pub selection: SelectionSet,
    pub selection_size: usize,
}

impl ViewState {
    /// Total over every selection size, including three attributes, which the
    /// controller never produces.
    pub fn derive(selection: &SelectionSet) -> Self {
        let stage = match (selection.len(), selection.pair()) {
            (0, _) => Stage::Empty,
            (1, _) => Stage::Single,
            (_, Some(key)) => Stage::Achievable(key),
            _ => Stage::Impossible,
        };

        let (title, description, examples): (Cow<'static, str>, _, &'static [Example]) =
            match stage {
                Stage::Empty => (PROMPT_TITLE.into(), PROMPT_DESCRIPTION, &[]),
                Stage::Single => {
                    let chosen: Vec<String> = selection
                        .iter()
                        .map(|attribute| attribute.name().to_uppercase())
                        .collect();
                    (
                        format!("You've chosen: {}", chosen.join(", ")).into(),
                        SINGLE_DESCRIPTION,
                        &[],
                    )
                }
                Stage::Achievable(key) => {
                    let scenario = ScenarioTable::get(key);
                    (
                        scenario.title.into(),
                        scenario.description,
                        scenario.examples,
                    )
                }
                Stage::Impossible => (
                    IMPOSSIBLE_TITLE.into(),
                    IMPOSSIBLE_DESCRIPTION,
                    &FINITE_RESOURCES[..],
                ),
            };

        Self {
            stage,
            title,
            description,
            examples,
            selection: *selection,
            selection_size: selection.len(),
        }
    }

    pub fn center_badge(&self) -> CenterBadge {
        match self.selection_size {
            2 => CenterBadge::Achievable,
            3 => CenterBadge::Overloaded,
            _ => CenterBadge::Impossible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccentColor, Attribute};

    fn view_of(attributes: &[Attribute]) -> ViewState {
        ViewState::derive(&attributes.iter().copied().collect())
    }

    #[test]
    fn empty_selection_prompts_for_priorities() {
        let view = view_of(&[]);
        assert_eq!(view.stage, Stage::Empty);
        assert_eq!(view.title, PROMPT_TITLE);
        assert!(view.examples.is_empty());
        assert_eq!(view.center_badge(), CenterBadge::Impossible);
    }

    #[test]
    fn single_selection_names_the_attribute_in_upper_case() {
        let view = view_of(&[Attribute::Cheap]);
        assert_eq!(view.stage, Stage::Single);
        assert_eq!(view.title, "You've chosen: CHEAP");
        assert_eq!(view.description, SINGLE_DESCRIPTION);
        assert!(view.examples.is_empty());
    }

    #[test]
    fn pair_selection_uses_the_scenario_table() {
        let view = view_of(&[Attribute::Fast, Attribute::Cheap]);
        assert_eq!(view.stage, Stage::Achievable(ScenarioKey::FastCheap));
        assert_eq!(view.title, "Fast + Cheap = Poor Quality");
        assert_eq!(view.examples.len(), 3);
        assert_eq!(view.examples[2].title, "Services");
        assert_eq!(view.center_badge(), CenterBadge::Achievable);
    }

    #[test]
    fn full_selection_explains_finite_resources() {
        let view = view_of(&Attribute::ALL);
        assert_eq!(view.stage, Stage::Impossible);
        assert_eq!(view.title, IMPOSSIBLE_TITLE);
        assert_eq!(view.examples.len(), 1);
        assert_eq!(view.examples[0].accent, AccentColor::Alert);
        assert!(view.examples[0].description.starts_with("Resources are finite."));
        assert_eq!(view.center_badge(), CenterBadge::Overloaded);
    }

    #[test]
    fn view_state_serializes_for_external_renderers() {
        let json = serde_json::to_value(view_of(&[Attribute::Good, Attribute::Fast]))
            .expect("serialize");
        assert_eq!(json["stage"]["kind"], "achievable");
        assert_eq!(json["stage"]["key"], "good_fast");
        assert_eq!(json["selection"], serde_json::json!(["good", "fast"]));
        assert_eq!(json["selection_size"], 2);
        assert_eq!(json["examples"][1]["accent"], "fast");
    }
}
