//! The HTTP shell around the synthesizer.
//!
//! A tiny_http accept loop shared by a small worker pool. Every request is
//! handled synchronously and independently: parse the query, call
//! [`synthesize`], respond. No state is shared between requests beyond the
//! immutable server configuration, so any number of workers may serve in
//! parallel without coordination.

use std::sync::Arc;
use std::thread;

use log::{debug, info, warn};
use tiny_http::{Header, Method, Response, Server};

use crate::params::param_to_color;
use crate::synth::synthesize;
use crate::{
    Error, GradientOptions, Palette, Result, TransformCenter, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};

/// Configuration for the gradient server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind, e.g. "127.0.0.1:8000"
    pub bind: String,
    /// Worker threads sharing the accept loop
    pub threads: usize,
    /// Reject unparseable or non-positive dimensions with 400 instead of
    /// silently falling back to the defaults
    pub strict_params: bool,
    /// Transform-center behavior passed through to the synthesizer
    pub center: TransformCenter,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
            threads: num_cpus::get(),
            strict_params: false,
            center: TransformCenter::default(),
        }
    }
}

/// A bound gradient server, ready to run.
pub struct GradientServer {
    server: Arc<Server>,
    config: ServerConfig,
}

impl GradientServer {
    /// Bind the configured address. The listener is live after this returns;
    /// no requests are served until [`run`](Self::run).
    pub fn bind(config: ServerConfig) -> Result<Self> {
        let server = Server::http(&config.bind)
            .map_err(|e| Error::ServerError(format!("failed to bind {}: {}", config.bind, e)))?;
        Ok(Self {
            server: Arc::new(server),
            config,
        })
    }

    /// The address the listener actually bound (useful with port 0).
    pub fn server_addr(&self) -> tiny_http::ListenAddr {
        self.server.server_addr()
    }

    /// Serve forever on `config.threads` workers. Blocks the calling thread.
    pub fn run(self) -> Result<()> {
        let threads = self.config.threads.max(1);
        info!(
            "serving gradients on http://{} with {} worker(s)",
            self.server_addr(),
            threads
        );
        let mut handles = Vec::with_capacity(threads);
        for _ in 0..threads {
            let server = Arc::clone(&self.server);
            let config = self.config.clone();
            handles.push(thread::spawn(move || {
                for request in server.incoming_requests() {
                    handle(request, &config);
                }
            }));
        }
        for handle in handles {
            handle
                .join()
                .map_err(|_| Error::ServerError("worker thread panicked".to_string()))?;
        }
        Ok(())
    }
}

fn handle(request: tiny_http::Request, config: &ServerConfig) {
    debug!("{} {}", request.method(), request.url());
    if *request.method() != Method::Get {
        let response = Response::from_string("Method Not Allowed")
            .with_status_code(405)
            .with_header("Allow: GET".parse::<Header>().unwrap());
        respond(request, response);
        return;
    }

    let url = request.url().to_string();
    let (path, query) = match url.split_once('?') {
        Some((p, q)) => (p, q),
        None => (url.as_str(), ""),
    };

    match path {
        "/" | "/api" => match gradient_response(query, config) {
            Ok(svg) => {
                let response = Response::from_string(svg)
                    .with_header(
                        "Content-Type: image/svg+xml; charset=utf-8"
                            .parse::<Header>()
                            .unwrap(),
                    )
                    .with_header("Cache-Control: no-store".parse::<Header>().unwrap());
                respond(request, response);
            }
            Err(reason) => {
                respond(request, Response::from_string(reason).with_status_code(400));
            }
        },
        "/presets" => {
            let body = serde_json::to_string(&crate::presets::COLOR_PRESETS)
                .unwrap_or_else(|_| "[]".to_string());
            let response = Response::from_string(body).with_header(
                "Content-Type: application/json".parse::<Header>().unwrap(),
            );
            respond(request, response);
        }
        _ => {
            respond(request, Response::from_string("Not Found").with_status_code(404));
        }
    }
}

/// Build the image body for a query string, or a 400 reason in strict mode.
fn gradient_response(query: &str, config: &ServerConfig) -> std::result::Result<String, String> {
    let mut colors = Vec::new();
    let mut width = None;
    let mut height = None;
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "colors" => colors.push(param_to_color(&value)),
            "width" => width = Some(value.into_owned()),
            "height" => height = Some(value.into_owned()),
            _ => {}
        }
    }

    let palette = Palette::from_query(colors);
    let opts = GradientOptions {
        width: parse_dimension("width", width, DEFAULT_WIDTH, config.strict_params)?,
        height: parse_dimension("height", height, DEFAULT_HEIGHT, config.strict_params)?,
        center: config.center,
    };
    Ok(synthesize(&palette, &opts))
}

/// Permissive mode falls back to `default` on anything unparseable; strict
/// mode turns the same inputs into a 400 reason.
fn parse_dimension(
    name: &str,
    raw: Option<String>,
    default: f64,
    strict: bool,
) -> std::result::Result<f64, String> {
    let raw = match raw {
        Some(raw) => raw,
        None => return Ok(default),
    };
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ if !strict => Ok(default),
        Ok(value) => Err(format!("{name} must be a positive finite number, got {value}")),
        Err(_) => Err(format!("{name} must be a number, got {raw:?}")),
    }
}

fn respond(request: tiny_http::Request, response: Response<std::io::Cursor<Vec<u8>>>) {
    if let Err(e) = request.respond(response) {
        warn!("failed to send response: {}", e);
    }
}
