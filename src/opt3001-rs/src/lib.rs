//! Driver for the TI OPT3001 ambient light sensor.
//!
//! The sensor is reached through a [`RegisterBus`], which any async
//! `embedded-hal` I2C bus satisfies once wrapped in an [`I2cRegisterBus`].
//! Creating an [`Opt3001`] puts the part into continuous conversion with a
//! 100 ms integration time, so every driver value refers to a configured device.

#![cfg_attr(not(test), no_std)]

pub mod bus;
pub mod opt3001;
pub mod types;

pub use bus::{I2cRegisterBus, RegisterBus};
pub use opt3001::{lux_from_raw, Opt3001};
pub use types::*;
