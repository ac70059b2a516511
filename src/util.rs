/// Numeric conversion helpers.
///
/// This module provides the conversions between sample counts, indices and
/// `f64` used by the statistics routines, with the precision and truncation
/// caveats stated in one place.
pub mod num;
/// Display formatting of results.
///
/// Renders values to a fixed number of significant digits, the way the
/// calculator screen shows them.
pub mod format;
