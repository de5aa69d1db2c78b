//! In-process backend and contexts for command tests.

use std::io::Read as _;
use std::path::Path;
use std::sync::{Arc, Mutex};

use pcl_auth::{Session, SessionStore};
use pcl_client::ApiClient;
use pcl_config::PclConfig;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;

/// `(method, url) -> (status, body)`.
pub type Route = fn(&str, &str) -> (u16, &'static str);

/// A request as the backend saw it.
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: String,
    pub url: String,
    pub content_type: Option<String>,
    pub body: String,
}

pub struct FakeBackend {
    pub base_url: String,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl FakeBackend {
    pub fn start(route: Route) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind fake backend");
        let port = server.server_addr().to_ip().expect("ip listener").port();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);

        std::thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let method = request.method().as_str().to_string();
                let url = request.url().to_string();
                let content_type = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Content-Type"))
                    .map(|h| h.value.as_str().to_string());
                let (status, payload) = route(&method, &url);
                log.lock().unwrap().push(Seen { method, url, content_type, body });
                let response = tiny_http::Response::from_string(payload)
                    .with_status_code(status)
                    .with_header(
                        tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            seen,
        }
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    /// Context pointed at this backend with a stored admin session under `dir`.
    pub fn admin_context(&self, dir: &Path) -> AppContext {
        let mut config = PclConfig::default();
        config.api.base_url.clone_from(&self.base_url);
        config.api.timeout_secs = 5;
        let client = ApiClient::new(&config.api).unwrap();
        let sessions = SessionStore::file_only(dir.join("session.json"));
        sessions.save(&Session::from_token("tok-test")).unwrap();
        AppContext {
            config,
            client,
            sessions,
        }
    }
}

/// JSON output, no prompts, no notes.
pub fn quiet_flags() -> GlobalFlags {
    GlobalFlags {
        format: OutputFormat::Json,
        limit: None,
        quiet: true,
        verbose: false,
        yes: true,
        base_url: None,
    }
}
