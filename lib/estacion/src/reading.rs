use std::fmt;

use crate::compass::CompassPoint;

/// One snapshot of the station's sensors, constructed fresh per
/// transmission and owned by the caller. Nothing is validated or clamped
/// here; the polling loop hands over already-plausible numbers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SensorReading {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub dew_point_c: f64,
    pub wind_speed_ms: f64,
    pub wind_gust_ms: f64,
    /// Heading in degrees, [0, 360).
    pub wind_direction_deg: f64,
    /// Cumulative over the station's lifetime, never decreases.
    pub total_rainfall_mm: f64,
    /// Cumulative rain-gauge bucket tips.
    pub total_tips: u32,
}

impl fmt::Display for SensorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "T: {:.1} / H: {:.1} / W: {:.1} m/s {}",
            self.temperature_c,
            self.humidity_pct,
            self.wind_speed_ms,
            CompassPoint::from_degrees(self.wind_direction_deg)
        )
    }
}

/// Dew point shortcut for stations without a dedicated sensor, accurate to
/// about ±1 °C while relative humidity stays above 50%.
pub fn dew_point_approx(temperature_c: f64, humidity_pct: f64) -> f64 {
    temperature_c - (100.0 - humidity_pct) / 5.0
}
