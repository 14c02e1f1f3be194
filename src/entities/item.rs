// 🧰 Item - a generic stocked object (modules, mechanics, loose parts)

use crate::entities::category::{self, ItemCategory};
use crate::entities::stock::{StockRecord, Stocked};
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-form value of a generic item: a label ("M3x10") or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for ItemValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemValue::Number(n) => write!(f, "{}", n),
            ItemValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for ItemValue {
    fn from(value: f64) -> Self {
        ItemValue::Number(value)
    }
}

impl From<&str> for ItemValue {
    fn from(value: &str) -> Self {
        ItemValue::Text(value.to_string())
    }
}

impl From<String> for ItemValue {
    fn from(value: String) -> Self {
        ItemValue::Text(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    record: StockRecord,
    category: Option<ItemCategory>,
    value: Option<ItemValue>,
    datasheet_path: Option<String>,
}

impl Item {
    /// Create an item; an unrecognised category is stored as unset
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        quantity: i64,
        category: &str,
    ) -> Self {
        Self::build(title, description, quantity, category::resolve(category))
    }

    /// Create an item, rejecting an unrecognised category
    pub fn try_new(
        title: impl Into<String>,
        description: impl Into<String>,
        quantity: i64,
        category: &str,
    ) -> Result<Self, ModelError> {
        let category = category::resolve_strict(category)?;
        Ok(Self::build(title, description, quantity, Some(category)))
    }

    fn build(
        title: impl Into<String>,
        description: impl Into<String>,
        quantity: i64,
        category: Option<ItemCategory>,
    ) -> Self {
        Item {
            record: StockRecord::new(title, description, quantity),
            category,
            value: None,
            datasheet_path: None,
        }
    }

    /// Builder: value
    pub fn with_value(mut self, value: impl Into<ItemValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Builder: datasheet path
    pub fn with_datasheet(mut self, path: impl Into<String>) -> Self {
        self.datasheet_path = Some(path.into());
        self
    }

    pub fn category(&self) -> Option<ItemCategory> {
        self.category
    }

    /// Stored value, or None if never supplied
    pub fn value(&self) -> Option<&ItemValue> {
        self.value.as_ref()
    }

    /// Replace the value. `None` changes nothing and returns false.
    pub fn set_value(&mut self, value: Option<ItemValue>) -> bool {
        match value {
            Some(value) => {
                self.value = Some(value);
                self.record.touch();
                true
            }
            None => false,
        }
    }

    pub fn datasheet_path(&self) -> Option<&str> {
        self.datasheet_path.as_deref()
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::build("Default", "Default", 0, Some(ItemCategory::Other))
    }
}

impl Stocked for Item {
    fn record(&self) -> &StockRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut StockRecord {
        &mut self.record
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.record.write_summary(f, category::label(self.category))
    }
}
