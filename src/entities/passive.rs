// ⚡ Passive Components - engineering-notation values
//
// A passive component's value is a magnitude plus an SI multiplier code:
// 49 + 'k' → 49 000. Either half may be missing; reads then degrade to None.

use crate::entities::component::ComponentItem;
use crate::entities::stock::{StockRecord, Stocked, ABSENT};
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// MULTIPLIER
// ============================================================================

/// SI prefix, stored by its one-character code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Multiplier {
    #[serde(rename = "f")]
    Femto,
    #[serde(rename = "p")]
    Pico,
    #[serde(rename = "n")]
    Nano,
    #[serde(rename = "u")]
    Micro,
    #[serde(rename = "m")]
    Milli,
    #[serde(rename = "k")]
    Kilo,
    #[serde(rename = "M")]
    Mega,
    #[serde(rename = "G")]
    Giga,
    #[serde(rename = "T")]
    Tera,
}

impl Multiplier {
    pub const ALL: [Multiplier; 9] = [
        Multiplier::Femto,
        Multiplier::Pico,
        Multiplier::Nano,
        Multiplier::Micro,
        Multiplier::Milli,
        Multiplier::Kilo,
        Multiplier::Mega,
        Multiplier::Giga,
        Multiplier::Tera,
    ];

    pub fn code(&self) -> char {
        match self {
            Multiplier::Femto => 'f',
            Multiplier::Pico => 'p',
            Multiplier::Nano => 'n',
            Multiplier::Micro => 'u',
            Multiplier::Milli => 'm',
            Multiplier::Kilo => 'k',
            Multiplier::Mega => 'M',
            Multiplier::Giga => 'G',
            Multiplier::Tera => 'T',
        }
    }

    /// Power-of-ten scale factor
    pub fn scale(&self) -> f64 {
        match self {
            Multiplier::Femto => 1e-15,
            Multiplier::Pico => 1e-12,
            Multiplier::Nano => 1e-9,
            Multiplier::Micro => 1e-6,
            Multiplier::Milli => 1e-3,
            Multiplier::Kilo => 1e3,
            Multiplier::Mega => 1e6,
            Multiplier::Giga => 1e9,
            Multiplier::Tera => 1e12,
        }
    }

    /// Case-sensitive: "m" is milli, "M" is mega
    pub fn from_code(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        Self::ALL.into_iter().find(|m| m.code() == c)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Multiplier {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ModelError::UnknownMultiplier(s.to_string()))
    }
}

// ============================================================================
// PASSIVE COMPONENT ITEM
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassiveComponentItem {
    component: ComponentItem,
    magnitude: Option<f64>,
    multiplier: Option<Multiplier>,
}

impl PassiveComponentItem {
    /// Create a passive component; an unknown multiplier code is dropped
    pub fn new(component: ComponentItem, magnitude: Option<f64>, multiplier: Option<&str>) -> Self {
        let multiplier = multiplier.and_then(|code| {
            let parsed = Multiplier::from_code(code);
            if parsed.is_none() {
                log::warn!("Unrecognised multiplier {:?} on {}, leaving it unset", code, component.id());
            }
            parsed
        });

        PassiveComponentItem {
            component,
            magnitude,
            multiplier,
        }
    }

    /// Create a passive component, rejecting an unknown multiplier code
    pub fn try_new(
        component: ComponentItem,
        magnitude: Option<f64>,
        multiplier: Option<&str>,
    ) -> Result<Self, ModelError> {
        let multiplier = multiplier.map(str::parse::<Multiplier>).transpose()?;

        Ok(PassiveComponentItem {
            component,
            magnitude,
            multiplier,
        })
    }

    /// The component this passive part extends (package, datasheet, category)
    pub fn component(&self) -> &ComponentItem {
        &self.component
    }

    /// Raw magnitude, before scaling
    pub fn value(&self) -> Option<f64> {
        self.magnitude
    }

    /// magnitude × scale; None unless both halves are present
    pub fn numeric_value(&self) -> Option<f64> {
        Some(self.magnitude? * self.multiplier?.scale())
    }

    pub fn multiplier(&self) -> Option<Multiplier> {
        self.multiplier
    }

    /// Replace the magnitude. `None` changes nothing and returns false.
    pub fn set_value(&mut self, magnitude: Option<f64>) -> bool {
        let Some(magnitude) = magnitude else {
            return false;
        };
        self.magnitude = Some(magnitude);
        self.component.record_mut().touch();
        true
    }

    /// `"<magnitude> <code><unit>"`, with absent halves rendered as None
    pub fn display_with_unit(&self, unit: &str) -> String {
        let magnitude = self
            .magnitude
            .map_or_else(|| ABSENT.to_string(), |m| m.to_string());
        let code = self
            .multiplier
            .map_or_else(|| ABSENT.to_string(), |m| m.code().to_string());
        format!("{} {}{}", magnitude, code, unit)
    }
}

impl Stocked for PassiveComponentItem {
    fn record(&self) -> &StockRecord {
        self.component.record()
    }

    fn record_mut(&mut self) -> &mut StockRecord {
        self.component.record_mut()
    }
}

impl fmt::Display for PassiveComponentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.component, f)
    }
}

// ============================================================================
// MEASURED TRAIT
// ============================================================================

/// A passive kind with a fixed measuring unit
pub trait Measured: Stocked {
    const UNIT: &'static str;

    fn passive(&self) -> &PassiveComponentItem;

    fn passive_mut(&mut self) -> &mut PassiveComponentItem;

    /// Value with prefix and unit, e.g. "49 kOhm"
    fn display_value(&self) -> String {
        self.passive().display_with_unit(Self::UNIT)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ComponentItem {
        ComponentItem::new("Resistor", "This is a 49kOhm resistor.", 10, "Resistors")
    }

    #[test]
    fn test_multiplier_table() {
        assert_eq!(Multiplier::from_code("f"), Some(Multiplier::Femto));
        assert_eq!(Multiplier::from_code("m"), Some(Multiplier::Milli));
        assert_eq!(Multiplier::from_code("M"), Some(Multiplier::Mega));
        assert_eq!(Multiplier::from_code("T"), Some(Multiplier::Tera));
        assert_eq!(Multiplier::Kilo.scale(), 1e3);
        assert_eq!(Multiplier::Pico.scale(), 1e-12);

        assert_eq!(Multiplier::from_code("x"), None);
        assert_eq!(Multiplier::from_code("kk"), None);
        assert_eq!(Multiplier::from_code(""), None);
    }

    #[test]
    fn test_multiplier_from_str_is_strict() {
        assert_eq!("G".parse::<Multiplier>(), Ok(Multiplier::Giga));
        assert_eq!(
            "K".parse::<Multiplier>(),
            Err(ModelError::UnknownMultiplier("K".to_string()))
        );
    }

    #[test]
    fn test_value_and_numeric_value() {
        let passive = PassiveComponentItem::new(base(), Some(49.0), Some("k"));

        assert_eq!(passive.value(), Some(49.0));
        assert_eq!(passive.numeric_value(), Some(49000.0));
        assert_eq!(passive.multiplier(), Some(Multiplier::Kilo));
    }

    #[test]
    fn test_numeric_value_without_multiplier_is_none() {
        let passive = PassiveComponentItem::new(base(), Some(49.0), None);

        assert_eq!(passive.value(), Some(49.0));
        assert_eq!(passive.numeric_value(), None);
        assert_eq!(passive.multiplier(), None);
    }

    #[test]
    fn test_missing_magnitude_is_none() {
        let passive = PassiveComponentItem::new(base(), None, Some("u"));

        assert_eq!(passive.value(), None);
        assert_eq!(passive.numeric_value(), None);
        assert_eq!(passive.multiplier(), Some(Multiplier::Micro));
    }

    #[test]
    fn test_unknown_multiplier_is_dropped() {
        let passive = PassiveComponentItem::new(base(), Some(4.7), Some("K"));

        assert_eq!(passive.multiplier(), None);
        assert_eq!(passive.numeric_value(), None);

        let strict = PassiveComponentItem::try_new(base(), Some(4.7), Some("K"));
        assert_eq!(strict.unwrap_err(), ModelError::UnknownMultiplier("K".to_string()));
    }

    #[test]
    fn test_set_value() {
        let mut passive = PassiveComponentItem::new(base(), None, Some("n"));
        assert!(passive.modified_at().is_none());

        assert!(!passive.set_value(None));
        assert!(passive.modified_at().is_none());

        assert!(passive.set_value(Some(100.0)));
        assert_eq!(passive.value(), Some(100.0));
        assert!((passive.numeric_value().unwrap() - 100e-9).abs() < 1e-18);
        assert!(passive.modified_at().is_some());
    }

    #[test]
    fn test_base_behaviour_is_shared() {
        let mut passive = PassiveComponentItem::new(base(), Some(1.0), Some("k"));

        passive.increase_quantity(5);
        passive.decrease_quantity(2);
        assert_eq!(passive.quantity(), 13);
        assert_eq!(passive.title(), "Resistor");
        assert!(passive.to_string().contains("It is from category Resistors."));
    }

    #[test]
    fn test_display_with_unit() {
        let passive = PassiveComponentItem::new(base(), Some(2.2), Some("u"));
        assert_eq!(passive.display_with_unit("F"), "2.2 uF");

        let bare = PassiveComponentItem::new(base(), None, None);
        assert_eq!(bare.display_with_unit("F"), "None NoneF");
    }
}
