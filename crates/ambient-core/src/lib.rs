pub mod aggregator;
pub mod bus;
pub mod capability;
pub mod clock;
pub mod config;
pub mod constants;
pub mod intensity;
pub mod presence;
pub mod state;
pub mod throttle;

pub use aggregator::*;
pub use bus::*;
pub use capability::*;
pub use clock::*;
pub use config::*;
pub use state::*;
