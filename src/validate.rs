//! VIN structural validation (ISO 3779 grammar).

use crate::error::InvalidVin;

/// Length of a VIN in characters.
pub const VIN_LENGTH: usize = 17;

/// Check whether `c` belongs to the VIN alphabet `0-9A-HJ-NPR-Z`.
///
/// `I`, `O` and `Q` are excluded by ISO 3779 — visually confusable with
/// `1` and `0`.
pub fn is_vin_char(c: char) -> bool {
    matches!(c, '0'..='9' | 'A'..='H' | 'J'..='N' | 'P' | 'R'..='Z')
}

/// The three fixed-width segments of a validated VIN.
///
/// Owns the normalized 17-character string; the segment accessors are
/// zero-copy slices of it, so `vin == wmi + vds + vis` holds by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    vin: String,
}

impl Segments {
    /// The normalized 17-character VIN.
    pub fn vin(&self) -> &str {
        &self.vin
    }

    /// World manufacturer identifier (characters 1–3).
    pub fn wmi(&self) -> &str {
        &self.vin[..3]
    }

    /// Vehicle descriptor section (characters 4–9).
    pub fn vds(&self) -> &str {
        &self.vin[3..9]
    }

    /// Vehicle identifier section (characters 10–17).
    pub fn vis(&self) -> &str {
        &self.vin[9..]
    }

    /// Consume the segments, returning the owned normalized VIN.
    pub fn into_vin(self) -> String {
        self.vin
    }
}

/// Validate `raw` against the ISO 3779 structural grammar.
///
/// The input is upper-cased before any check; the returned [`Segments`]
/// hold the normalized form. Accepts exactly 17 characters drawn from
/// `0-9A-HJ-NPR-Z`.
pub fn validate(raw: &str) -> Result<Segments, InvalidVin> {
    let value = raw.to_uppercase();

    let count = value.chars().count();
    if count != VIN_LENGTH {
        return Err(InvalidVin {
            value,
            reason: format!("expected {VIN_LENGTH} characters, got {count}"),
        });
    }

    if let Some((pos, c)) = value.chars().enumerate().find(|&(_, c)| !is_vin_char(c)) {
        return Err(InvalidVin {
            value,
            reason: format!("forbidden character '{}' at position {}", c, pos + 1),
        });
    }

    Ok(Segments { vin: value })
}
