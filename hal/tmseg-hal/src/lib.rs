//! tmseg Hardware Abstraction Layer
//!
//! This crate defines the two collaborators the display driver needs from
//! the board: a pair of digital lines and a blocking delay. Chip-specific
//! HALs (RP2040, or anything speaking `embedded-hal` 1.0) implement them,
//! and host tests substitute simulated lines and zero-cost delays.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (tmseg-firmware, etc.)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tmseg-driver (bus engine + encoder)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tmseg-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  tmseg-hal-   │       │ compat::Eh*   │
//! │    rp2040     │       │ (embedded-hal)│
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::BusLine`] - Bus clock and data lines
//! - [`delay::Delay`] - Blocking microsecond/millisecond delays

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod compat;
pub mod delay;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use compat::{EhDelay, EhPin};
pub use delay::Delay;
pub use gpio::{BusLine, OutputPin};
