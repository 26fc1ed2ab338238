/// Token whose presence marks a plan as covering a full week.
pub const DAY_MARKER: &str = "day";

/// Day divisor for plans containing the day marker.
pub const WEEK_PLAN_DAYS: u32 = 7;

/// Day divisor for plans without the day marker.
pub const SINGLE_DAY_PLAN_DAYS: u32 = 1;

/// Atwater factors: kcal per gram.
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Alignment points lost per percentage point of deviation from the target.
pub const ALIGNMENT_PENALTY_PER_POINT: f64 = 2.0;

/// Alignment score range.
pub const ALIGNMENT_MIN: f64 = 0.0;
pub const ALIGNMENT_MAX: f64 = 100.0;

/// Decimal places for gram, percentage and alignment figures.
pub const REPORT_DECIMALS: u32 = 1;

/// Round to a fixed number of decimal places, exact halves to even (6.25 -> 6.2, 93.75 -> 93.8).
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}
