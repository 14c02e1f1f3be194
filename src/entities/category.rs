// 🏷️ Categories - fixed classification labels per entity kind
//
// A stored category is Option<_>: Some(label) from the allowed set, or None
// ("Unset") when the supplied name was not recognised. Never a raw string.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rendered for an entity whose category is unset
pub const UNSET: &str = "Unset";

/// A closed set of category labels
pub trait Category: Sized + Copy + 'static {
    /// Every allowed label, in display order
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    /// Exact, case-sensitive lookup against `ALL`
    fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == name)
    }
}

/// Lenient lookup: unknown names become unset, with a warning
pub fn resolve<C: Category>(name: &str) -> Option<C> {
    let category = C::parse(name);
    if category.is_none() {
        log::warn!("Unrecognised category {:?}, storing as {}", name, UNSET);
    }
    category
}

/// Strict lookup for the `try_new` constructors
pub fn resolve_strict<C: Category>(name: &str) -> Result<C, ModelError> {
    C::parse(name).ok_or_else(|| ModelError::UnknownCategory(name.to_string()))
}

/// Display label for a possibly-unset category
pub fn label<C: Category>(category: Option<C>) -> &'static str {
    category.map_or(UNSET, |c| c.as_str())
}

// ============================================================================
// COMPONENT CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentCategory {
    Resistors,
    Capacitors,
    Diodes,
    #[serde(rename = "ICs")]
    Ics,
    Microcontrollers,
    Inductors,
    #[serde(rename = "Bipolar Transistors")]
    BipolarTransistors,
    #[serde(rename = "FETs")]
    Fets,
    Other,
}

impl Category for ComponentCategory {
    const ALL: &'static [Self] = &[
        ComponentCategory::Resistors,
        ComponentCategory::Capacitors,
        ComponentCategory::Diodes,
        ComponentCategory::Ics,
        ComponentCategory::Microcontrollers,
        ComponentCategory::Inductors,
        ComponentCategory::BipolarTransistors,
        ComponentCategory::Fets,
        ComponentCategory::Other,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ComponentCategory::Resistors => "Resistors",
            ComponentCategory::Capacitors => "Capacitors",
            ComponentCategory::Diodes => "Diodes",
            ComponentCategory::Ics => "ICs",
            ComponentCategory::Microcontrollers => "Microcontrollers",
            ComponentCategory::Inductors => "Inductors",
            ComponentCategory::BipolarTransistors => "Bipolar Transistors",
            ComponentCategory::Fets => "FETs",
            ComponentCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve_strict(s)
    }
}

// ============================================================================
// ITEM CATEGORY
// ============================================================================

/// Coarse categories for generic stocked items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    #[serde(rename = "Electronic Components")]
    ElectronicComponents,
    Mechanics,
    #[serde(rename = "Electronic Modules")]
    ElectronicModules,
    Other,
}

impl Category for ItemCategory {
    const ALL: &'static [Self] = &[
        ItemCategory::ElectronicComponents,
        ItemCategory::Mechanics,
        ItemCategory::ElectronicModules,
        ItemCategory::Other,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::ElectronicComponents => "Electronic Components",
            ItemCategory::Mechanics => "Mechanics",
            ItemCategory::ElectronicModules => "Electronic Modules",
            ItemCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve_strict(s)
    }
}

// ============================================================================
// TESTS
// ============================================================================
