use std::time::Duration;

use log::{info, warn};
use rand::Rng;
use tokio::time::interval;

use estacion::{dew_point_approx, Client, SensorReading, StationInfo};

#[tokio::main]
async fn main() {
    pretty_env_logger::init_timed();

    let server_url = std::env::var("SERVER_URL").expect("set ENV variable SERVER_URL");
    let station_id =
        std::env::var("STATION_ID").unwrap_or_else(|_| "FAKE_STATION_001".to_string());
    let interval_secs: u64 = std::env::var("SEND_INTERVAL_SECS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(60);
    let max_readings: Option<u32> = std::env::var("READINGS")
        .ok()
        .and_then(|value| value.parse().ok());

    let client = Client::new(&server_url, &station_id);

    info!("station {station_id}, pushing to {server_url} every {interval_secs}s");

    let station_info = StationInfo {
        id: station_id.clone(),
        name: "Estación Simulada".to_string(),
        location: "Madrid, España".to_string(),
        latitude: 40.4168,
        longitude: -3.7038,
        description: Some("simulated station for testing the webapp without hardware".to_string()),
    };

    if !client.register(&station_info).await {
        warn!("station not registered, assuming it already exists");
    }

    let mut station = FakeStation::new();
    let mut ticker = interval(Duration::from_secs(interval_secs));
    let mut attempts = 0u32;
    let mut sent = 0u32;

    loop {
        ticker.tick().await;

        attempts += 1;
        if client.send(&station.next_reading()).await {
            sent += 1;
        }

        if let Some(max) = max_readings {
            if attempts >= max {
                break;
            }
        }
    }

    info!("done, {sent} of {attempts} readings delivered");
}

/// Random jitter around fixed base values, the same shape of data a real
/// station produces: smooth temperature and humidity drift, gusts on top
/// of the mean wind, rain in occasional bursts.
struct FakeStation {
    base_temperature_c: f64,
    base_humidity_pct: f64,
    base_wind_speed_ms: f64,
    total_rainfall_mm: f64,
    total_tips: u32,
}

// one bucket tip of the simulated gauge, in mm
const MM_PER_TIP: f64 = 0.2794;

impl FakeStation {
    fn new() -> FakeStation {
        FakeStation {
            base_temperature_c: 20.0,
            base_humidity_pct: 60.0,
            base_wind_speed_ms: 5.0,
            total_rainfall_mm: 0.0,
            total_tips: 0,
        }
    }

    fn next_reading(&mut self) -> SensorReading {
        let mut rng = rand::rng();

        let temperature =
            (self.base_temperature_c + rng.random_range(-2.0..2.0)).clamp(-10.0, 40.0);
        let humidity = (self.base_humidity_pct + rng.random_range(-10.0..10.0)).clamp(20.0, 95.0);
        let wind_speed = (self.base_wind_speed_ms + rng.random_range(-2.0..3.0)).max(0.0);
        let wind_gust = wind_speed + rng.random_range(0.0..5.0);

        if rng.random_bool(0.3) {
            let burst = rng.random_range(0.0..2.0);
            self.total_rainfall_mm += burst;
            self.total_tips += (burst / MM_PER_TIP) as u32;
        }

        SensorReading {
            temperature_c: temperature,
            humidity_pct: humidity,
            dew_point_c: dew_point_approx(temperature, humidity),
            wind_speed_ms: wind_speed,
            wind_gust_ms: wind_gust,
            wind_direction_deg: rng.random_range(0.0..360.0),
            total_rainfall_mm: self.total_rainfall_mm,
            total_tips: self.total_tips,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_never_decrease() {
        let mut station = FakeStation::new();

        let mut last_rainfall = 0.0;
        let mut last_tips = 0;

        for _ in 0..100 {
            let reading = station.next_reading();
            assert!(reading.total_rainfall_mm >= last_rainfall);
            assert!(reading.total_tips >= last_tips);
            last_rainfall = reading.total_rainfall_mm;
            last_tips = reading.total_tips;
        }
    }

    #[test]
    fn test_readings_stay_in_range() {
        let mut station = FakeStation::new();

        for _ in 0..100 {
            let reading = station.next_reading();
            assert!((-10.0..=40.0).contains(&reading.temperature_c));
            assert!((20.0..=95.0).contains(&reading.humidity_pct));
            assert!(reading.wind_speed_ms >= 0.0);
            assert!(reading.wind_gust_ms >= reading.wind_speed_ms);
            assert!((0.0..360.0).contains(&reading.wind_direction_deg));
        }
    }
}
