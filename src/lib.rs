//! # fahrgestell
//!
//! ISO 3779 vehicle identification number (VIN) decoding: structural
//! validation plus region, country, manufacturer, and model-year
//! resolution from static WMI reference tables.
//!
//! A VIN is 17 characters from `0-9A-HJ-NPR-Z` (`I`, `O`, `Q` are
//! forbidden) split into three fixed-width segments: WMI (1–3),
//! VDS (4–9), VIS (10–17). Decoding never does I/O and holds no mutable
//! state; every lookup is best-effort, so unassigned codes come back as
//! `None` rather than errors. Check-digit verification is out of scope.
//!
//! ## Quick Start
//!
//! ```rust
//! use fahrgestell::Vin;
//!
//! let vin = Vin::parse("WVWZZZ1KZ6W612305")?;
//!
//! assert_eq!(vin.wmi(), "WVW");
//! assert_eq!(vin.vds(), "ZZZ1KZ");
//! assert_eq!(vin.vis(), "6W612305");
//! assert_eq!(vin.region(), Some("Europe"));
//! assert_eq!(vin.country(), Some("Germany"));
//! assert_eq!(vin.manufacturer(), Some("Volkswagen"));
//! # Ok::<(), fahrgestell::InvalidVin>(())
//! ```
//!
//! ## Model years
//!
//! The year code at position 10 repeats on a 30-year cycle, so a single
//! code maps to several calendar years. [`Vin::parse`] bounds the
//! candidates using the system clock; [`Vin::parse_at`] pins the current
//! year instead, keeping the result deterministic:
//!
//! ```rust
//! use fahrgestell::Vin;
//!
//! let vin = Vin::parse_at("WVWZZZ1KZAW612305", 2020)?;
//! assert_eq!(vin.model_year(), &[1980, 2010]);
//! # Ok::<(), fahrgestell::InvalidVin>(())
//! ```

pub mod decode;
mod error;
pub mod tables;
mod validate;
mod vin;

pub use error::InvalidVin;
pub use validate::{Segments, VIN_LENGTH, is_vin_char, validate};
pub use vin::Vin;
