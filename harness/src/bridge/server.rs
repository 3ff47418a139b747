use crate::bridge::model::SuiteInfo;
use crate::generator::cursor::SuiteCursor;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

type SharedCursor = Arc<Mutex<SuiteCursor>>;

#[derive(Debug)]
struct BridgeRejection;

impl warp::reject::Reject for BridgeRejection {}

/// HTTP stand-in for the native bridge call.
///
/// `GET /next` answers with the next batch or `null`, `GET /suite` describes
/// the run and `POST /reset` rewinds the suite.
#[derive(Clone)]
pub struct BenchBridge {
    cursor: SharedCursor,
    info: SuiteInfo,
}

impl BenchBridge {
    pub fn new(cursor: SuiteCursor, info: SuiteInfo) -> Self {
        Self {
            cursor: Arc::new(Mutex::new(cursor)),
            info,
        }
    }

    pub fn routes(&self) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        let cursor = self.cursor.clone();
        let cursor_filter = warp::any().map(move || cursor.clone());
        let info = self.info.clone();

        let next_route = warp::path("next")
            .and(warp::path::end())
            .and(warp::get())
            .and(cursor_filter.clone())
            .and_then(|cursor: SharedCursor| async move {
                let payload = match cursor.lock() {
                    Ok(mut guard) => guard.next_payload(),
                    Err(_) => {
                        log::error!("suite cursor lock poisoned");
                        return Err(warp::reject::custom(BridgeRejection));
                    }
                };
                match payload {
                    Ok(body) => Ok::<_, warp::Rejection>(warp::reply::with_header(
                        body,
                        "content-type",
                        "application/json",
                    )),
                    Err(err) => {
                        log::error!("encoding batch failed: {}", err);
                        Err(warp::reject::custom(BridgeRejection))
                    }
                }
            });

        let suite_route = warp::path("suite")
            .and(warp::path::end())
            .and(warp::get())
            .map(move || warp::reply::json(&info));

        let reset_route = warp::path("reset")
            .and(warp::path::end())
            .and(warp::post())
            .and(cursor_filter)
            .and_then(|cursor: SharedCursor| async move {
                match cursor.lock() {
                    Ok(mut guard) => {
                        guard.reset();
                        log::info!("suite rewound");
                        Ok::<_, warp::Rejection>(warp::reply::with_status(
                            warp::reply::json(&json!({"status": "ok"})),
                            StatusCode::OK,
                        ))
                    }
                    Err(_) => Err(warp::reject::custom(BridgeRejection)),
                }
            });

        next_route.or(suite_route).or(reset_route)
    }

    /// Serves the routes on a background thread with its own runtime.
    pub fn spawn(&self, address: SocketAddr) -> thread::JoinHandle<()> {
        let routes = self.routes();
        thread::spawn(move || {
            let runtime = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime,
                Err(err) => {
                    log::error!("failed to build bridge runtime: {}", err);
                    return;
                }
            };
            log::info!("bridge listening on http://{}", address);
            runtime.block_on(async move {
                warp::serve(routes).run(address).await;
            });
        })
    }
}
