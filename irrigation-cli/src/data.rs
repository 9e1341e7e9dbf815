use anyhow::{Context, Result};
use irrigation_model::{County, CountyMap};
use serde::{Deserialize, Serialize};

/// Handoff format from the data-loading collaborator: the county records
/// plus the raw border pairs. Border direction does not matter; the map
/// symmetrizes on insertion.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MapData {
    pub counties: Vec<County>,
    pub borders: Vec<(usize, usize)>,
}

impl MapData {
    pub fn build(self) -> Result<CountyMap> {
        let mut map = CountyMap::new(self.counties);
        for (a, b) in self.borders {
            map.add_border(a, b)
                .with_context(|| format!("Bad border entry ({}, {})", a, b))?;
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_map_from_json() {
        let json = r#"{
            "counties": [
                {"name": "Dallam", "fips": 48111, "location": [0, 0],
                 "gradient_angle": 0.5, "plantings": [
                    {"kind": "Corn", "acres_planted": 1000.0, "yield_amount": 150000.0}
                 ]},
                {"name": "Sherman", "fips": 48421, "location": [1, 0],
                 "gradient_angle": 0.2, "plantings": []}
            ],
            "borders": [[0, 1]]
        }"#;
        let data = serde_json::from_str::<MapData>(json).unwrap();
        let map = data.build().unwrap();
        assert_eq!(map.num_counties(), 2);
        assert_eq!(map.neighbors(0), &[1]);
        assert_eq!(map.neighbors(1), &[0]);
    }

    #[test]
    fn test_build_map_rejects_bad_border() {
        let json = r#"{
            "counties": [
                {"name": "Dallam", "fips": 48111, "location": [0, 0],
                 "gradient_angle": 0.5, "plantings": []}
            ],
            "borders": [[0, 3]]
        }"#;
        let data = serde_json::from_str::<MapData>(json).unwrap();
        assert!(data.build().is_err());
    }
}
