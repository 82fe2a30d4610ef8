//! Domain model: identifiers, inventory, status rules, and the trailer
//! aggregate
//!
//! Everything in this module is a pure value type. No IO, no clock reads,
//! no id generation: collaborators are injected by the mutation layer.

pub mod activity;
pub mod identifiers;
pub mod inventory;
pub mod status;
pub mod trailer;

pub use activity::{ActivityKind, ActivityLog};
pub use identifiers::{IdentifierError, LogId, SheetType, ToolName, TrailerId, TrailerName};
pub use inventory::{Inventory, InventoryItem, SheetItem, ToolItem};
pub use status::{derive_item_status, derive_trailer_status, ItemStatus, TrailerStatus};
pub use trailer::{Lifecycle, Trailer, TrailerProfile};
