//! Static trade-off content, one [`Scenario`] per [`ScenarioKey`].

use serde::Serialize;

use crate::domain::{AccentColor, ScenarioKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Example {
    pub title: &'static str,
    pub description: &'static str,
    pub accent: AccentColor,
}

/// Examples are listed in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub title: &'static str,
    pub description: &'static str,
    pub examples: &'static [Example],
}

static GOOD_FAST: Scenario = Scenario {
    title: "Good + Fast = Expensive",
    description: "You'll get high quality delivered quickly, but it will cost significantly more.",
    examples: &[
        Example {
            title: "Software Development",
            description: "Hiring senior developers and working overtime to deliver a polished app on tight deadlines.",
            accent: AccentColor::Good,
        },
        Example {
            title: "Manufacturing",
            description: "Rush orders with premium materials require expedited shipping and overtime labor.",
            accent: AccentColor::Fast,
        },
        Example {
            title: "Consulting Services",
            description: "Top-tier consultants working around the clock to meet your deadline.",
            accent: AccentColor::Good,
        },
    ],
};

static GOOD_CHEAP: Scenario = Scenario {
    title: "Good + Cheap = Slow",
    description: "You'll get high quality at a low cost, but it will take much longer to complete.",
    examples: &[
        Example {
            title: "Software Development",
            description: "A small team of skilled developers working part-time on your project over many months.",
            accent: AccentColor::Good,
        },
        Example {
            title: "Construction",
            description: "Quality craftsmanship using budget materials, with work done during slow seasons.",
            accent: AccentColor::Cheap,
        },
        Example {
            title: "Custom Manufacturing",
            description: "Artisanal production with careful attention to detail but no rush fees.",
            accent: AccentColor::Good,
        },
    ],
};

static FAST_CHEAP: Scenario = Scenario {
    title: "Fast + Cheap = Poor Quality",
    description: "You'll get it quickly and affordably, but quality will be compromised.",
    examples: &[
        Example {
            title: "Software Development",
            description: "Quick MVP with minimal testing, basic UI, and potential technical debt.",
            accent: AccentColor::Fast,
        },
        Example {
            title: "Manufacturing",
            description: "Mass-produced items with cheaper materials and minimal quality control.",
            accent: AccentColor::Cheap,
        },
        Example {
            title: "Services",
            description: "Junior staff or automated solutions with limited customization.",
            accent: AccentColor::Fast,
        },
    ],
};

pub(crate) static FINITE_RESOURCES: [Example; 1] = [Example {
    title: "Why This Doesn't Work",
    description: "Resources are finite. Attempting to maximize all three typically results in failure in all areas, budget overruns, missed deadlines, or compromised quality.",
    accent: AccentColor::Alert,
}];

/// Read-only mapping from attribute pair to scenario.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioTable;

impl ScenarioTable {
    pub fn get(key: ScenarioKey) -> &'static Scenario {
        match key {
            ScenarioKey::GoodFast => &GOOD_FAST,
            ScenarioKey::GoodCheap => &GOOD_CHEAP,
            ScenarioKey::FastCheap => &FAST_CHEAP,
        }
    }

    pub fn entries() -> impl Iterator<Item = (ScenarioKey, &'static Scenario)> {
        ScenarioKey::ALL.into_iter().map(|key| (key, Self::get(key)))
    }
}
