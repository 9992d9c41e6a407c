//! The filter engine: catalog + criteria + vehicle → visible parts.

use crate::catalog::Part;
use crate::search::FilterCriteria;
use crate::vehicle::Vehicle;

/// Parts passing every filter, in catalog order.
///
/// Pure and deterministic. Malformed criteria (inverted or negative price
/// bounds) are not corrected; they simply admit nothing or everything.
pub fn visible_parts<'a>(
    parts: &'a [Part],
    criteria: &FilterCriteria,
    vehicle: Option<&Vehicle>,
) -> Vec<&'a Part> {
    let filters = criteria.filters(vehicle);
    parts
        .iter()
        .filter(|part| filters.iter().all(|f| f.matches(part)))
        .collect()
}
