// 🟫 Resistor - a passive component measured in Ohm

use crate::entities::component::ComponentItem;
use crate::entities::passive::{Measured, PassiveComponentItem};
use crate::entities::stock::{StockRecord, Stocked};
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resistor {
    passive: PassiveComponentItem,
}

impl Resistor {
    pub fn new(component: ComponentItem, magnitude: Option<f64>, multiplier: Option<&str>) -> Self {
        Resistor {
            passive: PassiveComponentItem::new(component, magnitude, multiplier),
        }
    }

    pub fn try_new(
        component: ComponentItem,
        magnitude: Option<f64>,
        multiplier: Option<&str>,
    ) -> Result<Self, ModelError> {
        Ok(Resistor {
            passive: PassiveComponentItem::try_new(component, magnitude, multiplier)?,
        })
    }

    /// Resistance as "<magnitude> <multiplier>Ohm", e.g. "49 kOhm"
    pub fn resistor_value(&self) -> String {
        self.display_value()
    }
}

impl From<PassiveComponentItem> for Resistor {
    fn from(passive: PassiveComponentItem) -> Self {
        Resistor { passive }
    }
}

impl Measured for Resistor {
    const UNIT: &'static str = "Ohm";

    fn passive(&self) -> &PassiveComponentItem {
        &self.passive
    }

    fn passive_mut(&mut self) -> &mut PassiveComponentItem {
        &mut self.passive
    }
}

impl Stocked for Resistor {
    fn record(&self) -> &StockRecord {
        self.passive.record()
    }

    fn record_mut(&mut self) -> &mut StockRecord {
        self.passive.record_mut()
    }
}

impl fmt::Display for Resistor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.passive, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::passive::Multiplier;

    fn resistor(magnitude: Option<f64>, multiplier: Option<&str>) -> Resistor {
        Resistor::new(
            ComponentItem::new("Resistor", "This is a 49kOhm resistor.", 10, "Resistors"),
            magnitude,
            multiplier,
        )
    }

    #[test]
    fn test_resistor_value() {
        let r = resistor(Some(49.0), Some("k"));

        assert_eq!(r.resistor_value(), "49 kOhm");
        assert_eq!(r.passive().value(), Some(49.0));
        assert_eq!(r.passive().numeric_value(), Some(49000.0));
        assert_eq!(r.passive().multiplier(), Some(Multiplier::Kilo));
    }

    #[test]
    fn test_fractional_magnitude() {
        let r = resistor(Some(4.7), Some("M"));
        assert_eq!(r.resistor_value(), "4.7 MOhm");
    }

    #[test]
    fn test_missing_parts_render_placeholder() {
        assert_eq!(resistor(None, None).resistor_value(), "None NoneOhm");
        assert_eq!(resistor(Some(10.0), None).resistor_value(), "10 NoneOhm");
    }

    #[test]
    fn test_set_value_through_passive() {
        let mut r = resistor(Some(49.0), Some("k"));

        assert!(r.passive_mut().set_value(Some(10.0)));
        assert_eq!(r.resistor_value(), "10 kOhm");
        assert!(r.modified_at().is_some());
    }

    #[test]
    fn test_resistor_summary() {
        let mut r = resistor(Some(49.0), Some("k"));
        r.increase_quantity(5);
        r.decrease_quantity(2);

        let text = r.to_string();
        assert!(text.starts_with("This item is Resistor.\n"));
        assert!(text.contains("The quantity is 13.\n"));
        assert!(text.contains("This is a 49kOhm resistor..\n"));
        assert!(text.ends_with("It is from category Resistors.\n"));
    }

    #[test]
    fn test_resistor_json() {
        let r = resistor(Some(49.0), Some("k"));
        let json = serde_json::to_value(&r).unwrap();

        assert_eq!(json["passive"]["magnitude"], 49.0);
        assert_eq!(json["passive"]["multiplier"], "k");
        assert_eq!(json["passive"]["component"]["category"], "Resistors");

        let back: Resistor = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }
}
