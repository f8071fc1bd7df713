use log::{error, info, warn};
use rouille::{Request, Response};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    config::HttpConfig,
    domain::{
        id::TrackId,
        stats::CatalogStats,
        track::{Track, TrackSubmission},
    },
    http::error::{ApiError, INVALID_JSON},
    query::{self, TrackQuery},
    storage::BoxedStore,
};

pub const UPLOAD_MESSAGE: &str = "Track uploaded successfully!";

const COLLECTION_METHODS: &[&str] = &["GET", "POST"];
const ITEM_METHODS: &[&str] = &["GET"];

pub struct HttpServer {
    store: Arc<Mutex<BoxedStore>>,
    pub config: HttpConfig,
}

impl HttpServer {
    pub fn new(store: BoxedStore, config: HttpConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            config,
        }
    }

    pub fn run(self) {
        let addr = format!("{}:{}", self.config.bind_addr, self.config.port);
        rouille::start_server(addr, move |request| self.handle_request(request));
    }

    fn handle_request(&self, request: &Request) -> Response {
        Self::log_request(request);

        let result = rouille::router!(request,
            (GET) (/tracks) => {
                self.list_tracks(request)
            },
            (POST) (/tracks) => {
                self.create_track(request)
            },
            (GET) (/tracks/{id: String}) => {
                self.get_track(TrackId::new(id))
            },
            (GET) (/stats) => {
                self.stats()
            },
            _ => Err(Self::unrouted(request))
        );

        let response = result.unwrap_or_else(ApiError::into_response);
        info!("Response: {} {}", request.method(), response.status_code);
        response
    }

    fn log_request(request: &Request) {
        info!("{} {}", request.method(), request.raw_url());
    }

    /// 405 for a known path hit with the wrong verb, 404 otherwise
    fn unrouted(request: &Request) -> ApiError {
        match Self::allowed_methods(&request.url()) {
            Some(allow) => ApiError::MethodNotAllowed {
                method: request.method().to_string(),
                allow,
            },
            None => ApiError::NotFound("Not found".into()),
        }
    }

    fn allowed_methods(path: &str) -> Option<&'static [&'static str]> {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        match segments.as_slice() {
            ["tracks"] => Some(COLLECTION_METHODS),
            ["tracks", id] if !id.is_empty() => Some(ITEM_METHODS),
            ["stats"] => Some(ITEM_METHODS),
            _ => None,
        }
    }

    fn lock_store(&self) -> Result<MutexGuard<'_, BoxedStore>, ApiError> {
        self.store.lock().map_err(|e| {
            error!("Could not access track store under lock: {e}");
            ApiError::Internal("internal server error".into())
        })
    }

    fn list_tracks(&self, request: &Request) -> Result<Response, ApiError> {
        let criteria = TrackQuery::new(
            request.get_param("search"),
            request.get_param("status"),
            request.get_param("genre"),
        );

        let tracks = self.lock_store()?.list()?;
        let filtered = query::filter(&tracks, &criteria);

        Ok(Response::json(&TrackListResponse {
            total_tracks: tracks.len(),
            filtered_count: filtered.len(),
            tracks: filtered,
        }))
    }

    fn create_track(&self, request: &Request) -> Result<Response, ApiError> {
        let submission: TrackSubmission = rouille::input::json_input(request).map_err(|e| {
            warn!("unreadable upload body: {e}");
            ApiError::BadRequest(INVALID_JSON.into())
        })?;
        let new = submission.validate()?;

        let track = self.lock_store()?.create(new)?;
        info!("Created track {} ({})", track.id, track.title);

        Ok(Response::json(&CreatedTrackResponse {
            track,
            message: UPLOAD_MESSAGE.to_string(),
        })
        .with_status_code(201))
    }

    fn get_track(&self, id: TrackId) -> Result<Response, ApiError> {
        let track = self.lock_store()?.get(&id)?;
        Ok(Response::json(&TrackResponse { track }))
    }

    fn stats(&self) -> Result<Response, ApiError> {
        let tracks = self.lock_store()?.list()?;
        Ok(Response::json(&CatalogStats::from_tracks(&tracks)))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrackListResponse {
    tracks: Vec<Track>,
    total_tracks: usize,
    filtered_count: usize,
}

#[derive(Serialize, Deserialize)]
struct TrackResponse {
    track: Track,
}

#[derive(Serialize, Deserialize)]
struct CreatedTrackResponse {
    track: Track,
    message: String,
}

#[cfg(test)]
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    response: rouille::Response,
) -> anyhow::Result<T> {
    Ok(serde_json::from_reader(
        response.data.into_reader_and_size().0,
    )?)
}
