// 📦 Stock Record - the lifecycle every stocked entity shares
//
// "Identity persists, values change":
// - id and created_at are fixed at construction
// - modified_at stays None until the first mutation, then follows every mutation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendered in place of an optional value that was never supplied
pub const ABSENT: &str = "None";

// ============================================================================
// STOCK RECORD
// ============================================================================

/// Fields common to generic items and components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    id: String,
    title: String,
    description: String,
    /// Not bounded below; consumption past zero is recorded as-is
    quantity: i64,
    created_at: DateTime<Utc>,
    modified_at: Option<DateTime<Utc>>,
}

impl StockRecord {
    pub fn new(title: impl Into<String>, description: impl Into<String>, quantity: i64) -> Self {
        StockRecord {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            quantity,
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        self.modified_at
    }

    /// Stamp modified_at with the current time
    pub(crate) fn touch(&mut self) {
        let now = Utc::now();
        log::debug!("{} modified at {}", self.id, format_timestamp(&now));
        self.modified_at = Some(now);
    }

    fn replace_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
        self.touch();
    }

    fn replace_title(&mut self, title: Option<&str>) {
        if let Some(title) = title {
            self.title = title.to_string();
            self.touch();
        }
    }

    fn replace_description(&mut self, description: Option<&str>) {
        if let Some(description) = description {
            self.description = description.to_string();
            self.touch();
        }
    }

    /// Multi-line summary used by every entity's Display impl
    pub(crate) fn write_summary(&self, f: &mut fmt::Formatter<'_>, category: &str) -> fmt::Result {
        writeln!(f, "This item is {}.", self.title)?;
        writeln!(f, "The quantity is {}.", self.quantity)?;
        writeln!(f, "{}.", self.description)?;
        writeln!(f, "It was created {}.", format_timestamp(&self.created_at))?;
        writeln!(f, "It is from category {}.", category)
    }
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS.ffffff`
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

// ============================================================================
// STOCKED TRAIT
// ============================================================================

/// Accessors and mutators shared by every entity kind
///
/// Implementors only hand out their `StockRecord`; everything else is provided.
pub trait Stocked {
    fn record(&self) -> &StockRecord;

    fn record_mut(&mut self) -> &mut StockRecord;

    fn id(&self) -> &str {
        self.record().id()
    }

    fn title(&self) -> &str {
        self.record().title()
    }

    fn description(&self) -> &str {
        self.record().description()
    }

    fn quantity(&self) -> i64 {
        self.record().quantity()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.record().created_at()
    }

    fn modified_at(&self) -> Option<DateTime<Utc>> {
        self.record().modified_at()
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.record_mut().replace_quantity(quantity);
    }

    /// Add `amount` units (saturates at the i64 range instead of overflowing)
    fn increase_quantity(&mut self, amount: i64) {
        let quantity = self.quantity().saturating_add(amount);
        self.record_mut().replace_quantity(quantity);
    }

    /// Remove `amount` units; the result may go negative
    fn decrease_quantity(&mut self, amount: i64) {
        let quantity = self.quantity().saturating_sub(amount);
        self.record_mut().replace_quantity(quantity);
    }

    /// `None` leaves the title and modified_at untouched
    fn set_title(&mut self, title: Option<&str>) {
        self.record_mut().replace_title(title);
    }

    /// `None` leaves the description and modified_at untouched
    fn set_description(&mut self, description: Option<&str>) {
        self.record_mut().replace_description(description);
    }
}

impl Stocked for StockRecord {
    fn record(&self) -> &StockRecord {
        self
    }

    fn record_mut(&mut self) -> &mut StockRecord {
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
