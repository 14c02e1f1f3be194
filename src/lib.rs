// Parts Organiser - Core Library
// Inventory entity model for a personal parts organiser: generic items,
// electronic components, and passive components with engineering values.

pub mod error;
pub mod entities;

// Re-export commonly used types
pub use error::ModelError;
pub use entities::{
    StockRecord, Stocked, format_timestamp,
    Category, ComponentCategory, ItemCategory,
    Item, ItemValue,
    ComponentItem,
    Measured, Multiplier, PassiveComponentItem,
    Resistor, Capacitor, Inductor,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
