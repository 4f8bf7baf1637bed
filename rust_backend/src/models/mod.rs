pub mod breakdown;
pub mod configuration;
pub mod dimensions;
pub mod options;

pub use breakdown::*;
pub use configuration::*;
pub use dimensions::*;
pub use options::*;
