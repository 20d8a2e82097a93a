pub mod config;
pub mod error;
pub mod field;
pub mod fsm;
pub mod input;
pub mod modes;
pub mod outcome;
pub mod params;
pub mod rank;
pub mod resources;
pub mod session;
pub mod stats;
pub mod timer;

pub use config::*;
pub use error::*;
pub use field::*;
pub use fsm::*;
pub use modes::*;
pub use outcome::*;
pub use params::*;
pub use rank::*;
pub use resources::*;
pub use session::*;
pub use stats::*;
pub use timer::*;
