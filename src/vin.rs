use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::{Map, Value};

use crate::decode;
use crate::error::InvalidVin;
use crate::validate::{Segments, validate};

/// A decoded vehicle identification number.
///
/// Immutable once constructed: every field is derived during [`Vin::parse`]
/// and only read afterwards. The lookup fields are best-effort — an
/// unassigned WMI yields `None`, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vin {
    segments: Segments,
    region: Option<&'static str>,
    country: Option<&'static str>,
    manufacturer: Option<&'static str>,
    model_year: Vec<i32>,
}

impl Vin {
    /// Parse and decode `value`, reading the current calendar year from the
    /// system clock for model-year resolution.
    ///
    /// This is the only impure edge of the crate; use [`Vin::parse_at`]
    /// when determinism matters.
    pub fn parse(value: &str) -> Result<Self, InvalidVin> {
        Self::parse_at(value, chrono::Utc::now().year())
    }

    /// Parse and decode `value` with an injected current calendar year.
    ///
    /// Deterministic: the one time-dependent derivation (model year, see
    /// [`decode::model_years`]) uses `current_year` instead of a wall
    /// clock.
    pub fn parse_at(value: &str, current_year: i32) -> Result<Self, InvalidVin> {
        let segments = validate(value)?;

        let region = decode::region(segments.wmi());
        let country = decode::country(segments.wmi());
        let manufacturer = decode::manufacturer(segments.wmi());
        let model_year = segments
            .vis()
            .chars()
            .next()
            .map(|code| decode::model_years(code, current_year))
            .unwrap_or_default();

        Ok(Self {
            segments,
            region,
            country,
            manufacturer,
            model_year,
        })
    }

    /// The normalized 17-character VIN.
    pub fn vin(&self) -> &str {
        self.segments.vin()
    }

    /// World manufacturer identifier (characters 1–3).
    pub fn wmi(&self) -> &str {
        self.segments.wmi()
    }

    /// Vehicle descriptor section (characters 4–9).
    pub fn vds(&self) -> &str {
        self.segments.vds()
    }

    /// Vehicle identifier section (characters 10–17).
    pub fn vis(&self) -> &str {
        self.segments.vis()
    }

    /// Region assigned to the WMI, if any.
    pub fn region(&self) -> Option<&'static str> {
        self.region
    }

    /// Country assigned to the WMI, if any. Only present when a region is.
    pub fn country(&self) -> Option<&'static str> {
        self.country
    }

    /// Manufacturer assigned to the WMI, if any.
    pub fn manufacturer(&self) -> Option<&'static str> {
        self.manufacturer
    }

    /// All plausible model years, ascending. Possibly empty, and ambiguous
    /// by design across the 30-year code cycle.
    pub fn model_year(&self) -> &[i32] {
        &self.model_year
    }

    /// The decoded record as a JSON map keyed `vin`, `wmi`, `vds`, `vis`,
    /// `region`, `country`, `manufacturer`, `modelYear`.
    pub fn to_map(&self) -> Map<String, Value> {
        fn opt(value: Option<&str>) -> Value {
            value.map_or(Value::Null, Into::into)
        }

        let mut map = Map::new();
        map.insert("vin".into(), self.vin().into());
        map.insert("wmi".into(), self.wmi().into());
        map.insert("vds".into(), self.vds().into());
        map.insert("vis".into(), self.vis().into());
        map.insert("region".into(), opt(self.region));
        map.insert("country".into(), opt(self.country));
        map.insert("manufacturer".into(), opt(self.manufacturer));
        map.insert(
            "modelYear".into(),
            Value::Array(self.model_year.iter().map(|&y| y.into()).collect()),
        );
        map
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.vin())
    }
}

impl FromStr for Vin {
    type Err = InvalidVin;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Vin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Vin", 8)?;
        state.serialize_field("vin", self.vin())?;
        state.serialize_field("wmi", self.wmi())?;
        state.serialize_field("vds", self.vds())?;
        state.serialize_field("vis", self.vis())?;
        state.serialize_field("region", &self.region)?;
        state.serialize_field("country", &self.country)?;
        state.serialize_field("manufacturer", &self.manufacturer)?;
        state.serialize_field("modelYear", &self.model_year)?;
        state.end()
    }
}
