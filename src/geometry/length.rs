use crate::errors::{Error, Result};
use crate::types::strp;

/// Capability to convert a single value-list token into a user-unit number.
pub trait LengthParser {
    fn parse_absolute_length(&self, token: &str) -> Result<f32>;
}

impl<F> LengthParser for F
where
    F: Fn(&str) -> Result<f32>,
{
    fn parse_absolute_length(&self, token: &str) -> Result<f32> {
        self(token)
    }
}

// Scale factors to user units (px) for absolute CSS units
const UNITS: [(&str, f32); 6] = [
    ("px", 1.),
    ("pt", 96. / 72.),
    ("pc", 16.),
    ("in", 96.),
    ("cm", 96. / 2.54),
    ("mm", 96. / 25.4),
];

/// Default length parser: plain numbers are user units, and absolute
/// unit suffixes are scaled to user units.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsoluteLength;

impl LengthParser for AbsoluteLength {
    fn parse_absolute_length(&self, token: &str) -> Result<f32> {
        let value = token.trim();
        // units are ASCII case-insensitive
        let split = value.len().saturating_sub(2);
        let (number, scale) = match (value.get(..split), value.get(split..)) {
            (Some(number), Some(suffix)) => UNITS
                .iter()
                .find(|(unit, _)| suffix.eq_ignore_ascii_case(unit))
                .map(|(_, scale)| (number, *scale))
                .unwrap_or((value, 1.)),
            _ => (value, 1.),
        };
        let number = strp(number).map_err(|_| Error::Parse(format!("invalid length '{token}'")))?;
        if !number.is_finite() {
            return Err(Error::Parse(format!("non-finite length '{token}'")));
        }
        Ok(number * scale)
    }
}
