// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Bounds for a single field.
//!
//! Every field computes its `min`/`max` the same way: a default bound plus a
//! number of candidates, some of which only apply under a condition ("only
//! narrow the minute if the hour equals the boundary hour"). A candidate whose
//! condition does not hold, or whose value could not be read, is `None` and is
//! simply skipped, so conditional and unconditional constraints share one call
//! shape:
//!
//! ```
//! use time_input::range::safe_min;
//!
//! let hour_matches = false;
//! assert_eq!(safe_min(59, [hour_matches.then_some(30)]), 59);
//! assert_eq!(safe_min(59, [Some(30), None]), 30);
//! ```

/// Smallest of `default` and every present candidate.
pub fn safe_min<I>(default: u32, candidates: I) -> u32
where
    I: IntoIterator<Item = Option<u32>>,
{
    candidates.into_iter().flatten().fold(default, u32::min)
}

/// Largest of `default` and every present candidate.
pub fn safe_max<I>(default: u32, candidates: I) -> u32
where
    I: IntoIterator<Item = Option<u32>>,
{
    candidates.into_iter().flatten().fold(default, u32::max)
}

/// Reads a candidate out of a field string. Blank or non-numeric text is no
/// candidate at all.
pub fn candidate(value: Option<&str>) -> Option<u32> {
    value.and_then(|v| v.trim().parse().ok())
}
