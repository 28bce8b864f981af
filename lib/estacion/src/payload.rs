use serde::{Serialize, Serializer};

use crate::compass::CompassPoint;
use crate::reading::SensorReading;

const MS_TO_MPH: f64 = 2.237;

/// Body of `POST /api/stations/{id}/data`. The key set and the decimal
/// precision per field are the wire contract with the webapp's parser, do
/// not rename or drop keys.
#[derive(Debug, Serialize)]
pub struct DataPayload<'a> {
    station_id: &'a str,
    #[serde(serialize_with = "two_decimals")]
    temperature: f64,
    #[serde(serialize_with = "one_decimal")]
    humidity: f64,
    #[serde(serialize_with = "two_decimals")]
    dew_point: f64,
    #[serde(serialize_with = "two_decimals")]
    wind_speed_ms: f64,
    #[serde(serialize_with = "two_decimals")]
    wind_speed_mph: f64,
    #[serde(serialize_with = "two_decimals")]
    wind_gust_ms: f64,
    #[serde(serialize_with = "two_decimals")]
    wind_gust_mph: f64,
    wind_direction_degrees: i32,
    wind_direction_name: CompassPoint,
    #[serde(serialize_with = "two_decimals")]
    total_rainfall: f64,
    total_tips: u32,
    // the firmware never computed rain rates, but the server expects the keys
    rain_rate_mm_per_hour: f64,
    rain_rate_in_per_hour: f64,
}

impl<'a> DataPayload<'a> {
    pub fn new(station_id: &'a str, reading: &SensorReading) -> DataPayload<'a> {
        DataPayload {
            station_id,
            temperature: reading.temperature_c,
            humidity: reading.humidity_pct,
            dew_point: reading.dew_point_c,
            wind_speed_ms: reading.wind_speed_ms,
            wind_speed_mph: reading.wind_speed_ms * MS_TO_MPH,
            wind_gust_ms: reading.wind_gust_ms,
            wind_gust_mph: reading.wind_gust_ms * MS_TO_MPH,
            wind_direction_degrees: reading.wind_direction_deg as i32,
            wind_direction_name: CompassPoint::from_degrees(reading.wind_direction_deg),
            total_rainfall: reading.total_rainfall_mm,
            total_tips: reading.total_tips,
            rain_rate_mm_per_hour: 0.0,
            rain_rate_in_per_hour: 0.0,
        }
    }
}

/// Body of `POST /api/stations`, matches the webapp's station-create schema.
#[derive(Debug, Serialize)]
pub struct StationInfo {
    pub id: String,
    pub name: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
}

fn one_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((value * 10.0).round() / 10.0)
}

fn two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((value * 100.0).round() / 100.0)
}
