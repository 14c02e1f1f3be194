// 🔌 Component Item - an electronic component kept in stock
//
// Base of the component family. Passive kinds wrap this struct rather than
// inherit from it (see passive.rs / resistor.rs).

use crate::entities::category::{self, ComponentCategory};
use crate::entities::stock::{StockRecord, Stocked};
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentItem {
    record: StockRecord,

    /// None when the supplied category was not recognised
    category: Option<ComponentCategory>,

    /// Body package (e.g., "0805", "TO-220")
    package: Option<String>,

    datasheet_path: Option<String>,

    image_path: Option<String>,
}

impl ComponentItem {
    /// Create a component; an unrecognised category is stored as unset
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        quantity: i64,
        category: &str,
    ) -> Self {
        Self::with_category(title, description, quantity, category::resolve(category))
    }

    /// Create a component, rejecting an unrecognised category
    pub fn try_new(
        title: impl Into<String>,
        description: impl Into<String>,
        quantity: i64,
        category: &str,
    ) -> Result<Self, ModelError> {
        let category = category::resolve_strict(category)?;
        Ok(Self::with_category(title, description, quantity, Some(category)))
    }

    /// Create a component from an already-typed category
    pub fn with_category(
        title: impl Into<String>,
        description: impl Into<String>,
        quantity: i64,
        category: Option<ComponentCategory>,
    ) -> Self {
        ComponentItem {
            record: StockRecord::new(title, description, quantity),
            category,
            package: None,
            datasheet_path: None,
            image_path: None,
        }
    }

    /// Builder: body package
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Builder: datasheet path
    pub fn with_datasheet(mut self, path: impl Into<String>) -> Self {
        self.datasheet_path = Some(path.into());
        self
    }

    /// Builder: image path
    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        self.image_path = Some(path.into());
        self
    }

    pub fn category(&self) -> Option<ComponentCategory> {
        self.category
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn datasheet_path(&self) -> Option<&str> {
        self.datasheet_path.as_deref()
    }

    pub fn image_path(&self) -> Option<&str> {
        self.image_path.as_deref()
    }
}

impl Default for ComponentItem {
    fn default() -> Self {
        Self::with_category("Default", "Default", 0, Some(ComponentCategory::Other))
    }
}

impl Stocked for ComponentItem {
    fn record(&self) -> &StockRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut StockRecord {
        &mut self.record
    }
}

impl fmt::Display for ComponentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.record.write_summary(f, category::label(self.category))
    }
}

// ============================================================================
// TESTS
// ============================================================================
