// Entity Models
//
// Every entity has:
// - Stable identity (UUID) and creation time that never change
// - Values (title, quantity, ...) that change through explicit setters
// - A modification stamp that follows every change
//
// Component kinds compose rather than inherit:
//   ComponentItem → PassiveComponentItem → Resistor / Capacitor / Inductor

pub mod stock;
pub mod category;
pub mod item;
pub mod component;
pub mod passive;
pub mod resistor;
pub mod reactive;

pub use stock::{StockRecord, Stocked, format_timestamp};
pub use category::{Category, ComponentCategory, ItemCategory};
pub use item::{Item, ItemValue};
pub use component::ComponentItem;
pub use passive::{Measured, Multiplier, PassiveComponentItem};
pub use resistor::Resistor;
pub use reactive::{Capacitor, Inductor};
