/// Number-range categories for HIPs.
///
/// A HIP's category follows from its number alone. Ranges are inclusive and
/// leave gaps (e.g. 68-69, 400+); numbers in a gap belong to no category.
use std::ops::RangeInclusive;

use crate::model::HipRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HipCategory {
    /// Stable identifier, e.g. "foundation"
    pub slug: &'static str,
    /// Display name, e.g. "Foundation & Models"
    pub name: &'static str,
    /// Inclusive number range, e.g. 0..=10
    pub range: RangeInclusive<u64>,
}

impl HipCategory {
    pub fn contains(&self, number: u64) -> bool {
        self.range.contains(&number)
    }
}

const fn category(slug: &'static str, name: &'static str, lo: u64, hi: u64) -> HipCategory {
    HipCategory {
        slug,
        name,
        range: lo..=hi,
    }
}

pub const CATEGORIES: &[HipCategory] = &[
    category("foundation", "Foundation & Models", 0, 10),
    category("interfaces", "Application Interfaces", 11, 25),
    category("infrastructure", "Infrastructure Services", 26, 39),
    category("devtools", "Developer Tools & SDKs", 40, 49),
    category("cloud", "Cloud Infrastructure", 50, 59),
    category("platform", "Platform Services", 60, 67),
    category("quantum", "Quantum Computing", 70, 73),
    category("governance", "Governance & Supply Chain", 74, 76),
    category("robotics", "Robotics & Physical AI", 80, 83),
    category("biotech", "Biotech & Life Sciences", 90, 94),
    category("crosschain", "Cross-Chain Integration", 100, 199),
    category("ethics", "Responsible AI & Ethics", 200, 249),
    category("impact", "Impact & Sustainability", 250, 299),
    category("architecture", "Architecture", 300, 399),
];

/// Category whose range holds `number`.
pub fn category_for(number: u64) -> Option<&'static HipCategory> {
    CATEGORIES.iter().find(|c| c.contains(number))
}

pub fn category_by_slug(slug: &str) -> Option<&'static HipCategory> {
    CATEGORIES.iter().find(|c| c.slug == slug)
}

/// Records grouped by category in table order. Empty categories are omitted;
/// records outside every range are left out.
pub fn group_by_category(records: &[HipRecord]) -> Vec<(&'static HipCategory, Vec<&HipRecord>)> {
    CATEGORIES
        .iter()
        .map(|cat| {
            let hips: Vec<&HipRecord> = records.iter().filter(|r| cat.contains(r.number)).collect();
            (cat, hips)
        })
        .filter(|(_, hips)| !hips.is_empty())
        .collect()
}
