use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    time::{SystemTime, UNIX_EPOCH},
};
use tokio::{net::TcpListener, time::Instant};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS: u64 = 300;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const STATIC_CACHE_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 86_400);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug)]
struct ServerConfig {
    port: u16,
    static_dir: PathBuf,
    static_cache_max_age_seconds: u64,
    log_level: LogLevel,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            port: parse_env_port("PORT", DEFAULT_PORT),
            static_dir: parse_env_non_empty_string("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            static_cache_max_age_seconds: parse_env_u64_with_bounds(
                "STATIC_CACHE_MAX_AGE_SECONDS",
                DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS,
                STATIC_CACHE_MAX_AGE_SECONDS_BOUNDS,
            ),
            log_level: parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL),
        }
    }

    fn cache_control(&self) -> HeaderValue {
        cache_control(&format!(
            "public, max-age={}",
            self.static_cache_max_age_seconds
        ))
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&bind_address).await?;

    log_event(
        &config,
        LogLevel::Info,
        "server_started",
        serde_json::json!({
            "address": format!("http://127.0.0.1:{}", config.port),
            "staticDir": config.static_dir.display().to_string(),
        }),
    );

    if !static_dir_has_index(&config.static_dir) {
        log_event(
            &config,
            LogLevel::Info,
            "static_index_missing",
            serde_json::json!({
                "staticDir": config.static_dir.display().to_string(),
                "hint": "run `trunk build --release` first",
            }),
        );
    }

    axum::serve(listener, router(config)).await?;
    Ok(())
}

/// Serves the built site; unknown paths fall back to `index.html` so in-page
/// anchors survive a reload.
fn router(config: ServerConfig) -> Router {
    let index = config.static_dir.join("index.html");
    let static_service = ServeDir::new(&config.static_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(config, access_log))
}

async fn access_log(State(config): State<ServerConfig>, request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let status = response.status();

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }
    if status.is_success() && !headers.contains_key(header::CACHE_CONTROL) {
        headers.insert(header::CACHE_CONTROL, config.cache_control());
    }

    log_event(
        &config,
        if status.is_server_error() {
            LogLevel::Info
        } else {
            LogLevel::Debug
        },
        "request_completed",
        serde_json::json!({
            "requestId": request_id,
            "method": method,
            "path": path,
            "status": status.as_u16(),
            "durationMs": started.elapsed().as_millis() as u64,
        }),
    );

    response
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    parse_u64_with_bounds(std::env::var(name).ok().as_deref(), default, bounds)
}

fn parse_u64_with_bounds(value: Option<&str>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_port(name: &str, default: u16) -> u16 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    non_empty(std::env::var(name).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    log_level_from(parse_env_non_empty_string(name).as_deref(), default)
}

fn log_level_from(value: Option<&str>, default: LogLevel) -> LogLevel {
    match value.map(str::to_ascii_lowercase).as_deref() {
        Some("debug") => LogLevel::Debug,
        Some("info") => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn log_record(level: LogLevel, event: &str, fields: serde_json::Value) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload)
}

fn log_event(config: &ServerConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    println!("{}", log_record(level, event, fields));
}

fn static_dir_has_index(dir: &Path) -> bool {
    dir.join("index.html").is_file()
}
