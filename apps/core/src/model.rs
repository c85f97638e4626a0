use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn in_range(&self) -> bool {
        (-180.0..=180.0).contains(&self.lng) && (-90.0..=90.0).contains(&self.lat)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub place_name: String,
    pub center: LngLat,
}

impl Feature {
    pub fn new(id: &str, place_name: &str, center: LngLat) -> Self {
        Self {
            id: id.to_string(),
            place_name: place_name.to_string(),
            center,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedResult {
    pub place_name: String,
    pub center: LngLat,
}

impl From<&Feature> for SelectedResult {
    fn from(value: &Feature) -> Self {
        Self {
            place_name: value.place_name.clone(),
            center: value.center,
        }
    }
}
