// Filter/sort engine: a pure function from (records, criteria) to the visible sequence

use crate::error::FilterError;
use crate::models::{FilterCriteria, SortMode, VehicleRecord};

// Signature of a filter engine the controller can run; `try_apply` by default
pub type FilterEngine = fn(&[VehicleRecord], &FilterCriteria) -> Result<Vec<VehicleRecord>, FilterError>;

// The built-in engine never fails
pub fn try_apply(
    records: &[VehicleRecord],
    criteria: &FilterCriteria,
) -> Result<Vec<VehicleRecord>, FilterError> {
    Ok(apply(records, criteria))
}

// Applies every criterion as an AND, then sorts by price if requested.
// Sorting is stable; without a sort mode the input order is preserved.
pub fn apply(records: &[VehicleRecord], criteria: &FilterCriteria) -> Vec<VehicleRecord> {
    let needle = criteria.search.to_lowercase();
    let brand = criteria.brand.as_deref().filter(|b| !b.is_empty());

    let mut result: Vec<VehicleRecord> = records
        .iter()
        .filter(|car| needle.is_empty() || car.matches_search(&needle))
        .filter(|car| brand.is_none_or(|b| car.brand == b))
        .filter(|car| car.price >= criteria.min_price && car.price <= criteria.max_price)
        .filter(|car| criteria.fuel_type.is_none_or(|f| car.fuel_type == f))
        .filter(|car| criteria.seats.admits(car.seats))
        .cloned()
        .collect();

    match criteria.sort {
        SortMode::PriceAscending => result.sort_by_key(|car| car.price),
        SortMode::PriceDescending => result.sort_by(|a, b| b.price.cmp(&a.price)),
        SortMode::None => {}
    }

    tracing::debug!(input = records.len(), output = result.len(), "Filter applied");
    result
}
