//! Control of a TM robot controller over [Modbus/TCP](http://modbus.org/), built on
//! [rodbus](https://docs.rs/rodbus) and [Tokio](https://docs.rs/tokio).
//!
//! The controller must have remote control and its Modbus slave enabled, and the robot
//! must be in Auto Mode.
//!
//! # Supported operations
//!
//! * Change the current project (holding registers 7701..)
//! * Play/pause the current project (coil 7104)
//! * Change the project speed (holding register 7101)
//! * Read the error flag (discrete input 7201)
//! * Read the project running flag (discrete input 7202)
//!
//! # Example
//!
//! ```no_run
//! use tmrobot::client::connect;
//! use tmrobot::{ConnectConfig, ProjectName, Robot, Speed};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = connect(&ConnectConfig::default()).await?;
//!     let mut robot = Robot::new(session);
//!
//!     robot.change_project(&ProjectName::new("pointspose")?).await?;
//!     robot.set_speed(Speed::new(25)?).await?;
//!     println!("{}", robot.status().await?);
//!
//!     robot.into_inner().close().await?;
//!     Ok(())
//! }
//! ```

/// connection to the controller
pub mod client;
/// connection parameters
pub mod config;
/// packing of text into registers
pub mod encode;
/// register map of the controller
pub mod registers;

mod error;
mod robot;
mod transport;
mod types;

pub use crate::config::ConnectConfig;
pub use crate::error::*;
pub use crate::robot::*;
pub use crate::transport::*;
pub use crate::types::*;
