use chipp_http::{HttpClient, HttpMethod, NoInterceptor};
use log::{debug, error, info};
use serde::Serialize;

use crate::payload::{DataPayload, StationInfo};
use crate::reading::SensorReading;
use crate::Result;

/// Network-association probe consulted before every request. The embedded
/// station asks its WiFi stack; hosts with a permanent link use
/// [`AlwaysOnline`].
pub trait Connectivity {
    fn is_connected(&self) -> bool;
}

pub struct AlwaysOnline;

impl Connectivity for AlwaysOnline {
    fn is_connected(&self) -> bool {
        true
    }
}

/// Client for the weather webapp's station API. Holds the server base URL
/// and the station id for its lifetime and keeps no other state between
/// calls.
pub struct Client {
    server_url: String,
    station_id: String,
    connectivity: Box<dyn Connectivity + Send + Sync>,
    http_client: HttpClient<NoInterceptor>,
}

impl Client {
    /// Neither value is validated here; a malformed `server_url` shows up
    /// as a failed send.
    pub fn new(server_url: &str, station_id: &str) -> Client {
        Client::with_connectivity(server_url, station_id, AlwaysOnline)
    }

    pub fn with_connectivity<C>(server_url: &str, station_id: &str, connectivity: C) -> Client
    where
        C: Connectivity + Send + Sync + 'static,
    {
        let http_client = HttpClient::new("http://0.0.0.0").unwrap();

        Client {
            server_url: server_url.trim_end_matches('/').to_string(),
            station_id: station_id.to_string(),
            connectivity: Box::new(connectivity),
            http_client,
        }
    }

    /// Pushes one reading to the webapp. Exactly one POST, no retry and no
    /// buffering: `true` only for HTTP 201, everything else degrades to
    /// `false` plus a log line, and the reading is gone. Cadence and retry
    /// policy belong to the caller.
    pub async fn send(&self, reading: &SensorReading) -> bool {
        if !self.connectivity.is_connected() {
            error!("{}: network is down, dropping reading", self.station_id);
            return false;
        }

        let url = format!("{}/api/stations/{}/data", self.server_url, self.station_id);
        let payload = DataPayload::new(&self.station_id, reading);

        match self.post_json(url, &payload).await {
            Ok(()) => {
                info!("{}: sent {}", self.station_id, reading);
                true
            }
            Err(err) => {
                error!("{}: reading rejected: {}", self.station_id, err);
                false
            }
        }
    }

    /// Registers the station so the webapp accepts data for its id. An
    /// already-registered id comes back as a non-201 and maps to `false`,
    /// which callers usually treat as "probably exists, carry on".
    pub async fn register(&self, info: &StationInfo) -> bool {
        if !self.connectivity.is_connected() {
            error!("{}: network is down, skipping registration", self.station_id);
            return false;
        }

        let url = format!("{}/api/stations", self.server_url);

        match self.post_json(url, info).await {
            Ok(()) => {
                info!("{}: station registered", self.station_id);
                true
            }
            Err(err) => {
                debug!("{}: registration refused: {}", self.station_id, err);
                false
            }
        }
    }

    async fn post_json<T: Serialize>(&self, url: String, body: &T) -> Result<()> {
        let mut request = self.http_client.new_request_with_url(url)?;
        request.set_method(HttpMethod::Post);
        request.set_json_body(body);

        self.http_client
            .perform_request(request, |request, response| {
                if response.status_code == 201 {
                    Ok(())
                } else {
                    Err((request, response).into())
                }
            })
            .await?;

        Ok(())
    }
}
