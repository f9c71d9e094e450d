pub mod cli;
pub mod driver;
pub mod error;
pub mod message;
pub mod package;
pub mod training;
pub mod types;
pub mod utils;

pub use error::TrackerError;
pub use message::InfoMessage;
pub use package::{DEFAULT_PACKAGES, read_package, supported_codes};
pub use training::{Readings, Running, SportsWalking, Swimming, Training};
pub use types::Package;
