//! Compiled-in crop reference data
//!
//! Growing conditions and typical yields for crops commonly farmed in
//! Sri Lanka. Yields are kg per acre, rainfall is annual mm, temperature
//! is the mean growing-season range in °C.

use crate::models::{ClimateRange, CropRecord};

pub const CATALOG: &[CropRecord] = &[
    CropRecord {
        id: "rice",
        name: "Rice (පඩි)",
        soil_types: &["clay", "loamy", "alluvial"],
        rainfall_mm: ClimateRange::new(1000.0, 2500.0),
        temperature_c: ClimateRange::new(20.0, 35.0),
        yield_per_acre_kg: 1800.0,
        season: "Yala & Maha seasons",
        tip: "Requires standing water. Best planted in lowland areas.",
    },
    CropRecord {
        id: "tea",
        name: "Tea (තේ)",
        soil_types: &["loamy", "red"],
        rainfall_mm: ClimateRange::new(1500.0, 3000.0),
        temperature_c: ClimateRange::new(13.0, 28.0),
        yield_per_acre_kg: 800.0,
        season: "Year-round",
        tip: "Thrives in highland areas. Requires well-drained acidic soil.",
    },
    CropRecord {
        id: "coconut",
        name: "Coconut (පොල්)",
        soil_types: &["sandy", "loamy", "laterite"],
        rainfall_mm: ClimateRange::new(1000.0, 2000.0),
        temperature_c: ClimateRange::new(25.0, 35.0),
        yield_per_acre_kg: 3000.0,
        season: "Year-round harvest",
        tip: "Coastal and lowland areas. Tolerates sandy soil well.",
    },
    CropRecord {
        id: "rubber",
        name: "Rubber (රබර්)",
        soil_types: &["laterite", "loamy", "red"],
        rainfall_mm: ClimateRange::new(2000.0, 3500.0),
        temperature_c: ClimateRange::new(25.0, 34.0),
        yield_per_acre_kg: 500.0,
        season: "Year-round tapping",
        tip: "Wet zone crop. Requires consistent rainfall.",
    },
    CropRecord {
        id: "cinnamon",
        name: "Cinnamon (කුරුඳු)",
        soil_types: &["sandy", "loamy"],
        rainfall_mm: ClimateRange::new(1250.0, 2500.0),
        temperature_c: ClimateRange::new(25.0, 32.0),
        yield_per_acre_kg: 150.0,
        season: "Harvest twice yearly",
        tip: "Sri Lanka's premium export. Grows well in southern coastal areas.",
    },
    CropRecord {
        id: "pepper",
        name: "Black Pepper (ගම්මිරිස්)",
        soil_types: &["loamy", "red", "laterite"],
        rainfall_mm: ClimateRange::new(1500.0, 3000.0),
        temperature_c: ClimateRange::new(20.0, 35.0),
        yield_per_acre_kg: 400.0,
        season: "December to March harvest",
        tip: "Vine crop, needs support trees. Shade tolerant.",
    },
    CropRecord {
        id: "vegetables",
        name: "Vegetables (එළවළු)",
        soil_types: &["loamy", "sandy", "clay", "alluvial", "red"],
        rainfall_mm: ClimateRange::new(500.0, 2000.0),
        temperature_c: ClimateRange::new(15.0, 35.0),
        yield_per_acre_kg: 4000.0,
        season: "Year-round with rotation",
        tip: "Diverse options: tomatoes, beans, cabbage, carrots based on region.",
    },
    CropRecord {
        id: "maize",
        name: "Maize (බඩ ඉරිඟු)",
        soil_types: &["loamy", "sandy", "alluvial"],
        rainfall_mm: ClimateRange::new(500.0, 1500.0),
        temperature_c: ClimateRange::new(20.0, 35.0),
        yield_per_acre_kg: 2500.0,
        season: "Yala & Maha seasons",
        tip: "Drought tolerant. Good for dry zone farming.",
    },
    CropRecord {
        id: "banana",
        name: "Banana (කෙසෙල්)",
        soil_types: &["loamy", "clay", "alluvial"],
        rainfall_mm: ClimateRange::new(1000.0, 2500.0),
        temperature_c: ClimateRange::new(22.0, 35.0),
        yield_per_acre_kg: 8000.0,
        season: "Year-round harvest",
        tip: "High yield crop. Multiple varieties suited for Sri Lanka.",
    },
    CropRecord {
        id: "sugarcane",
        name: "Sugarcane (උක්)",
        soil_types: &["loamy", "clay", "alluvial"],
        rainfall_mm: ClimateRange::new(750.0, 1500.0),
        temperature_c: ClimateRange::new(20.0, 35.0),
        yield_per_acre_kg: 25000.0,
        season: "12-18 month cycle",
        tip: "Industrial crop. Suited for dry and intermediate zones.",
    },
];

/// All crops in catalog order
pub fn all() -> &'static [CropRecord] {
    CATALOG
}

/// Look up a crop by identifier, ignoring case
pub fn get(id: &str) -> Option<&'static CropRecord> {
    CATALOG.iter().find(|c| c.id.eq_ignore_ascii_case(id.trim()))
}

/// Distinct soil tokens accepted by at least one crop, sorted
pub fn soil_types() -> Vec<&'static str> {
    let mut soils: Vec<&'static str> = CATALOG
        .iter()
        .flat_map(|c| c.soil_types.iter().copied())
        .collect();
    soils.sort_unstable();
    soils.dedup();
    soils
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_size() {
        let ids: Vec<_> = all().iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                "rice", "tea", "coconut", "rubber", "cinnamon", "pepper", "vegetables", "maize",
                "banana", "sugarcane"
            ]
        );
    }

    #[test]
    fn test_catalog_records_are_well_formed() {
        for crop in all() {
            assert!(crop.rainfall_mm.min >= 0.0, "{}", crop.id);
            assert!(crop.rainfall_mm.min <= crop.rainfall_mm.max, "{}", crop.id);
            assert!(crop.temperature_c.min <= crop.temperature_c.max, "{}", crop.id);
            assert!(crop.yield_per_acre_kg > 0.0, "{}", crop.id);
            assert!(!crop.soil_types.is_empty(), "{}", crop.id);
            for soil in crop.soil_types {
                assert_eq!(*soil, soil.to_lowercase(), "{}", crop.id);
            }
        }
    }

    #[test]
    fn test_get_by_id() {
        let rice = get("rice").unwrap();
        assert_eq!(rice.yield_per_acre_kg, 1800.0);
        assert_eq!(get("Tea").unwrap().id, "tea");
        assert!(get("quinoa").is_none());
    }

    #[test]
    fn test_soil_types_are_distinct_and_sorted() {
        assert_eq!(
            soil_types(),
            vec!["alluvial", "clay", "laterite", "loamy", "red", "sandy"]
        );
    }
}
