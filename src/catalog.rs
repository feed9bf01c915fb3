// Record store: the ordered, immutable list of vehicles browsed in a session

use crate::error::{AppError, AppResult};
use crate::models::{FuelType, VehicleRecord};
use once_cell::sync::Lazy;
use std::collections::HashSet;

// Fixed seed list shipped with the binary
static SEED_RECORDS: Lazy<Vec<VehicleRecord>> = Lazy::new(|| {
    vec![
        seed(1, "Toyota", "Camry", 25_000, FuelType::Petrol, 5, "Toyota+Camry", "Reliable midsize sedan with great fuel economy"),
        seed(2, "Honda", "Civic", 22_000, FuelType::Petrol, 5, "Honda+Civic", "Popular compact car with sporty design"),
        seed(3, "Ford", "Mustang", 45_000, FuelType::Petrol, 4, "Ford+Mustang", "Iconic American muscle car"),
        seed(4, "Tesla", "Model 3", 50_000, FuelType::Electric, 5, "Tesla+Model3", "Premium electric vehicle with autopilot"),
        seed(5, "BMW", "X5", 65_000, FuelType::Diesel, 7, "BMW+X5", "Luxury SUV with powerful performance"),
    ]
});

#[allow(clippy::too_many_arguments)]
fn seed(
    id: u32,
    brand: &str,
    model: &str,
    price: u32,
    fuel_type: FuelType,
    seats: u32,
    image_text: &str,
    description: &str,
) -> VehicleRecord {
    VehicleRecord {
        id,
        brand: brand.to_string(),
        model: model.to_string(),
        price,
        fuel_type,
        seats,
        image: format!("https://via.placeholder.com/300x200?text={}", image_text),
        description: description.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<VehicleRecord>,
}

impl Catalog {
    // Builds a catalog, rejecting duplicate ids so lookups stay unambiguous
    pub fn new(records: Vec<VehicleRecord>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id) {
                return Err(AppError::DuplicateRecordId(record.id));
            }
        }
        tracing::debug!(count = records.len(), "Catalog built");
        Ok(Self { records })
    }

    // The built-in seed fixture
    pub fn seeded() -> Self {
        Self {
            records: SEED_RECORDS.clone(),
        }
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&VehicleRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    // Dropdown options, distinct and in first-seen order

    pub fn brands(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.brand.clone()))
    }

    pub fn fuel_types(&self) -> Vec<FuelType> {
        distinct(self.records.iter().map(|r| r.fuel_type))
    }

    pub fn seat_options(&self) -> Vec<u32> {
        distinct(self.records.iter().map(|r| r.seats))
    }
}

fn distinct<T, I>(values: I) -> Vec<T>
where
    T: Clone + Eq + std::hash::Hash,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    values.into_iter().filter(|v| seen.insert(v.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_five_records_in_id_order() {
        let catalog = Catalog::seeded();
        let ids: Vec<u32> = catalog.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(catalog.get(4).map(|r| r.title()), Some("Tesla Model 3".to_string()));
        assert!(catalog.get(42).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut records = Catalog::seeded().records().to_vec();
        records.push(records[0].clone());
        assert!(matches!(Catalog::new(records), Err(AppError::DuplicateRecordId(1))));
    }

    #[test]
    fn facets_are_distinct_in_first_seen_order() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.brands(), vec!["Toyota", "Honda", "Ford", "Tesla", "BMW"]);
        assert_eq!(
            catalog.fuel_types(),
            vec![FuelType::Petrol, FuelType::Electric, FuelType::Diesel]
        );
        assert_eq!(catalog.seat_options(), vec![5, 4, 7]);
    }
}
