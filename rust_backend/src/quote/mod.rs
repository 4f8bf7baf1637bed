//! Project quotes: multi-room pricing, installation estimates, and
//! quote metadata.

pub mod builder;
pub mod installation;
pub mod reference;

pub use builder::{
    price_door, price_quote, validate_rooms, DoorSpec, ProjectQuote, QuoteLine, RoomSpec, HST_RATE,
};
pub use installation::{
    estimate_installation, InstallationCategory, InstallationEstimate, InstallationJob,
    ServiceArea,
};
pub use reference::quote_reference;
