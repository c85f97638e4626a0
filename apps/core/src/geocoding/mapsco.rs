use std::fmt::Write as _;
use std::time::Duration;

use isahc::prelude::*;
use isahc::Request;
use serde::Deserialize;

use super::{GeocodeError, GeocodingClient, SearchRequest};
use crate::model::{Feature, LngLat};
use crate::query::QueryKind;

pub const DEFAULT_ENDPOINT: &str = "https://geocode.maps.co";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = "geofind-core/0.1";

// Blocking backend for geocode.maps.co. Text queries hit /search,
// coordinate queries hit /reverse.
pub struct MapsCoClient {
    endpoint: String,
    api_key: String,
}

impl MapsCoClient {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

impl GeocodingClient for MapsCoClient {
    fn search(&mut self, request: &SearchRequest) -> Result<Vec<Feature>, GeocodeError> {
        let url = match request.kind {
            QueryKind::Coordinate(center) => reverse_url(&self.endpoint, &self.api_key, center),
            QueryKind::Text => forward_url(&self.endpoint, &self.api_key, request),
        };

        let http_request = Request::get(&url)
            .timeout(REQUEST_TIMEOUT)
            .header("User-Agent", USER_AGENT)
            .body(())
            .map_err(|e| GeocodeError::Transport(e.to_string()))?;

        let client = isahc::HttpClient::new().map_err(|e| GeocodeError::Transport(e.to_string()))?;
        let mut response = client
            .send(http_request)
            .map_err(|e| GeocodeError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeocodeError::Endpoint {
                status: response.status().as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| GeocodeError::Transport(e.to_string()))?;
        match request.kind {
            QueryKind::Coordinate(_) => decode_reverse(&body),
            QueryKind::Text => decode_forward(&body, request.limit),
        }
    }
}

fn forward_url(endpoint: &str, api_key: &str, request: &SearchRequest) -> String {
    let mut url = format!(
        "{endpoint}/search?q={}&limit={}&accept-language={}",
        percent_encode(&request.query),
        request.limit,
        percent_encode(&request.language),
    );
    if let Some(types) = &request.types {
        let _ = write!(url, "&featureType={}", percent_encode(types));
    }
    if !api_key.is_empty() {
        let _ = write!(url, "&api_key={api_key}");
    }
    url
}

fn reverse_url(endpoint: &str, api_key: &str, center: LngLat) -> String {
    let mut url = format!("{endpoint}/reverse?lat={}&lon={}", center.lat, center.lng);
    if !api_key.is_empty() {
        let _ = write!(url, "&api_key={api_key}");
    }
    url
}

// The endpoint serves lat/lon as strings on /search but as numbers on
// some /reverse deployments; accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    fn as_f64(&self, field: &str) -> Result<f64, GeocodeError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(raw) => raw
                .parse()
                .map_err(|_| GeocodeError::Decode(format!("invalid {field}: {raw}"))),
        }
    }
}

#[derive(Deserialize)]
struct RawPlace {
    place_id: Option<i64>,
    lat: NumberOrString,
    lon: NumberOrString,
    display_name: String,
}

fn decode_forward(body: &str, limit: u16) -> Result<Vec<Feature>, GeocodeError> {
    let places: Vec<RawPlace> =
        serde_json::from_str(body).map_err(|e| GeocodeError::Decode(e.to_string()))?;
    places
        .into_iter()
        .take(limit as usize)
        .enumerate()
        .map(|(index, place)| to_feature(index, place))
        .collect()
}

fn decode_reverse(body: &str) -> Result<Vec<Feature>, GeocodeError> {
    let place: RawPlace =
        serde_json::from_str(body).map_err(|e| GeocodeError::Decode(e.to_string()))?;
    Ok(vec![to_feature(0, place)?])
}

fn to_feature(index: usize, place: RawPlace) -> Result<Feature, GeocodeError> {
    let lng = place.lon.as_f64("lon")?;
    let lat = place.lat.as_f64("lat")?;
    let id = place
        .place_id
        .map(|id| format!("place.{id}"))
        .unwrap_or_else(|| format!("place.{index}"));
    Ok(Feature {
        id,
        place_name: place.display_name,
        center: LngLat::new(lng, lat),
    })
}

fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len() * 2);
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            b' ' => out.push('+'),
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}
