// Capacitors (Farad) and inductors (Henry)

use crate::entities::component::ComponentItem;
use crate::entities::passive::{Measured, PassiveComponentItem};
use crate::entities::stock::{StockRecord, Stocked};
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CAPACITOR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capacitor {
    passive: PassiveComponentItem,
}

impl Capacitor {
    pub fn new(component: ComponentItem, magnitude: Option<f64>, multiplier: Option<&str>) -> Self {
        Capacitor {
            passive: PassiveComponentItem::new(component, magnitude, multiplier),
        }
    }

    pub fn try_new(
        component: ComponentItem,
        magnitude: Option<f64>,
        multiplier: Option<&str>,
    ) -> Result<Self, ModelError> {
        Ok(Capacitor {
            passive: PassiveComponentItem::try_new(component, magnitude, multiplier)?,
        })
    }
}

impl Measured for Capacitor {
    const UNIT: &'static str = "F";

    fn passive(&self) -> &PassiveComponentItem {
        &self.passive
    }

    fn passive_mut(&mut self) -> &mut PassiveComponentItem {
        &mut self.passive
    }
}

impl Stocked for Capacitor {
    fn record(&self) -> &StockRecord {
        self.passive.record()
    }

    fn record_mut(&mut self) -> &mut StockRecord {
        self.passive.record_mut()
    }
}

impl fmt::Display for Capacitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.passive, f)
    }
}

// ============================================================================
// INDUCTOR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inductor {
    passive: PassiveComponentItem,
}

impl Inductor {
    pub fn new(component: ComponentItem, magnitude: Option<f64>, multiplier: Option<&str>) -> Self {
        Inductor {
            passive: PassiveComponentItem::new(component, magnitude, multiplier),
        }
    }

    pub fn try_new(
        component: ComponentItem,
        magnitude: Option<f64>,
        multiplier: Option<&str>,
    ) -> Result<Self, ModelError> {
        Ok(Inductor {
            passive: PassiveComponentItem::try_new(component, magnitude, multiplier)?,
        })
    }
}

impl Measured for Inductor {
    const UNIT: &'static str = "H";

    fn passive(&self) -> &PassiveComponentItem {
        &self.passive
    }

    fn passive_mut(&mut self) -> &mut PassiveComponentItem {
        &mut self.passive
    }
}

impl Stocked for Inductor {
    fn record(&self) -> &StockRecord {
        self.passive.record()
    }

    fn record_mut(&mut self) -> &mut StockRecord {
        self.passive.record_mut()
    }
}

impl fmt::Display for Inductor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.passive, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacitor_display_value() {
        let cap = Capacitor::new(
            ComponentItem::new("Cap", "Decoupling", 50, "Capacitors").with_package("0805"),
            Some(100.0),
            Some("n"),
        );

        assert_eq!(cap.display_value(), "100 nF");
        assert_eq!(cap.passive().component().package(), Some("0805"));
    }

    #[test]
    fn test_inductor_display_value() {
        let coil = Inductor::new(
            ComponentItem::new("Coil", "Buck converter inductor", 5, "Inductors"),
            Some(22.0),
            Some("u"),
        );

        assert_eq!(coil.display_value(), "22 uH");
        assert!((coil.passive().numeric_value().unwrap() - 22e-6).abs() < 1e-15);
    }

    #[test]
    fn test_strict_construction() {
        let base = ComponentItem::new("Cap", "", 1, "Capacitors");
        assert!(Capacitor::try_new(base.clone(), Some(1.0), Some("µ")).is_err());
        assert!(Inductor::try_new(base, Some(1.0), Some("m")).is_ok());
    }
}
