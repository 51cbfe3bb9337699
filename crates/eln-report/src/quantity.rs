//! Display quantities derived from stored sample amounts.
//!
//! Every function here returns a display string. Consumers never do further
//! arithmetic on the output, so absent inputs become a literal placeholder
//! instead of a computed zero.

use eln_common::{presence, Sample, Solvent};

/// Placeholder shown for an absent amount.
pub const PLACEHOLDER: &str = " - ";

/// Conversion applied to a stored value before display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityRule {
    pub multiplier: f64,
    pub precision: usize,
}

/// Grams to milligrams.
pub const MASS_MG: QuantityRule = QuantityRule {
    multiplier: 1000.0,
    precision: 3,
};

/// Litres to millilitres.
pub const VOLUME_ML: QuantityRule = QuantityRule {
    multiplier: 1000.0,
    precision: 3,
};

/// Moles to millimoles.
pub const AMOUNT_MMOL: QuantityRule = QuantityRule {
    multiplier: 1000.0,
    precision: 3,
};

/// Product yield as a whole percentage.
pub const YIELD_PCT: QuantityRule = QuantityRule {
    multiplier: 100.0,
    precision: 0,
};

/// Equivalent ratio of starting materials and reactants.
pub const EQUIVALENT: QuantityRule = QuantityRule {
    multiplier: 1.0,
    precision: 3,
};

impl QuantityRule {
    /// Apply the rule to a stored value.
    pub fn apply(&self, target: Option<f64>) -> String {
        scale(target, self.multiplier, self.precision)
    }
}

/// Scale a stored value and format it with exactly `precision` decimals.
///
/// Absent or non-finite targets yield [`PLACEHOLDER`], as does a product
/// that overflows to infinity. Rounding is half-up (away from zero) on the
/// scaled value trimmed to nine decimals, so anything within `1e-9` below a
/// half rounds up: `0.4999999999` at precision 0 prints `1`.
pub fn scale(target: Option<f64>, multiplier: f64, precision: usize) -> String {
    match presence::finite(target)
        .map(|value| value * multiplier)
        .filter(|value| value.is_finite())
    {
        Some(value) => format!("{:.*}", precision, round_half_up(value, precision)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Equivalent ratio for reactants, yield percentage for products.
///
/// The yield keeps its `%` suffix even when the value is absent.
pub fn equivalent_or_yield(sample: &Sample, is_product: bool) -> String {
    if is_product {
        format!("{}%", YIELD_PCT.apply(sample.equivalent))
    } else {
        EQUIVALENT.apply(sample.equivalent)
    }
}

/// Volume suffix for a solvent line, e.g. `" (5ml)"`.
///
/// The realized amount wins over the target amount; with neither recorded
/// the volume reads `0.0`.
pub fn solvent_volume_label(solvent: &Solvent) -> String {
    let value = presence::finite(solvent.real_amount_value)
        .or_else(|| presence::finite(solvent.target_amount_value))
        .map(|v| v.to_string())
        .unwrap_or_else(|| "0.0".to_string());
    format!(" ({}ml)", value)
}

fn round_half_up(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    let scaled = value * factor;
    if !scaled.is_finite() {
        // Precision beyond f64 resolution: nothing left to round.
        return if value == 0.0 { 0.0 } else { value };
    }
    // Strip binary noise (1.0005 * 1000 = 1000.4999...) before rounding.
    let scaled = format!("{:.9}", scaled).parse::<f64>().unwrap_or(scaled);
    let rounded = scaled.round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
