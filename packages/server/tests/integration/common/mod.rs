use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use imagegen::{
    GeneratedImage, GenerationError, GenerationRequest, GenerationResponse, ImageGenerator,
};
use reqwest::Client;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tempfile::TempDir;

use server::config::{
    AppConfig, CorsConfig, DatabaseConfig, GenerationConfig, ServerConfig, TryOnConfig,
};
use server::state::AppState;
use server::tryon::{Generators, Orchestrator};

pub mod routes {
    pub const ROOT: &str = "/api";
    pub const ROOT_SLASH: &str = "/api/";
    pub const STATUS: &str = "/api/status";
    pub const CATALOG: &str = "/api/saree-catalog";
    pub const TRYON: &str = "/api/virtual-tryon";
    pub const FAVORITES: &str = "/api/favorites";

    pub fn catalog_category(category: &str) -> String {
        format!("/api/saree-catalog/{category}")
    }

    pub fn tryon_image(id: &str) -> String {
        format!("/api/tryon/{id}/base64")
    }

    pub fn favorites_of(user_id: &str) -> String {
        format!("/api/favorites/{user_id}")
    }

    pub fn favorite(tryon_id: &str) -> String {
        format!("/api/favorites/{tryon_id}")
    }
}

/// Per-test SQLite database in a temporary directory.
pub struct TestDb {
    pub db: DatabaseConnection,
    pub config: DatabaseConfig,
    _dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = DatabaseConfig {
            url: format!("sqlite://{}?mode=rwc", dir.path().join("tryon.db").display()),
            max_connections: 5,
            min_connections: 1,
        };
        let db = server::database::init_db(&config)
            .await
            .expect("Failed to initialize test database");

        Self {
            db,
            config,
            _dir: dir,
        }
    }
}

pub fn test_config(database: DatabaseConfig) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            max_body_bytes: 32 * 1024 * 1024,
            cors: CorsConfig {
                allow_origins: vec!["*".to_string()],
                max_age: 3600,
            },
        },
        database,
        generation: GenerationConfig::default(),
        tryon: TryOnConfig::default(),
    }
}

/// A running test server.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DatabaseConnection,
    _db: TestDb,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestApp {
    /// Server without a credential: try-ons produce placeholder images.
    pub async fn spawn() -> Self {
        Self::spawn_with(None).await
    }

    pub async fn spawn_with(generators: Option<Generators>) -> Self {
        let test_db = TestDb::new().await;
        let config = test_config(test_db.config.clone());
        let orchestrator = Orchestrator::new(generators, &config.tryon, &config.generation)
            .with_timeout(Duration::from_secs(5));

        let state = AppState {
            db: test_db.db.clone(),
            config,
            orchestrator: Arc::new(orchestrator),
        };
        let app = server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            db: test_db.db.clone(),
            _db: test_db,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to send DELETE request");

        TestResponse::from_response(res).await
    }

    /// Run a placeholder try-on and return its id.
    pub async fn create_tryon(&self) -> String {
        let res = self
            .post(
                routes::TRYON,
                &serde_json::json!({"pose_style": "front", "blouse_style": "traditional"}),
            )
            .await;
        assert_eq!(res.status, 200, "try-on failed: {}", res.text);
        res.id()
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.expect("Failed to read response body");
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    pub fn id(&self) -> String {
        self.body["id"]
            .as_str()
            .expect("Response has no string id")
            .to_string()
    }

    pub fn assert_error(&self, status: u16, code: &str) {
        assert_eq!(self.status, status, "unexpected status: {}", self.text);
        assert_eq!(self.body["code"], code, "unexpected body: {}", self.text);
        assert!(self.body["detail"].is_string());
    }
}

/// Decode a base64 PNG and return its dimensions.
pub fn png_dimensions(data: &str) -> (u32, u32) {
    let bytes = STANDARD.decode(data).expect("Image is not valid base64");
    let image = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
        .expect("Image is not a PNG");
    (image.width(), image.height())
}

/// Scripted behavior of a [`FakeGenerator`].
#[derive(Clone)]
pub enum Script {
    Image(&'static str),
    NoImages,
    Fail,
    Hang,
}

/// In-memory [`ImageGenerator`] that records every request it receives.
pub struct FakeGenerator {
    name: &'static str,
    script: Script,
    calls: Mutex<Vec<GenerationRequest>>,
}

impl FakeGenerator {
    pub fn new(name: &'static str, script: Script) -> Arc<Self> {
        Arc::new(Self {
            name,
            script,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for FakeGenerator {
    fn name(&self) -> &str {
        self.name
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        self.calls.lock().unwrap().push(request.clone());
        match self.script {
            Script::Image(data) => Ok(GenerationResponse {
                text: None,
                images: vec![GeneratedImage {
                    mime_type: "image/png".to_string(),
                    data: data.to_string(),
                }],
            }),
            Script::NoImages => Ok(GenerationResponse {
                text: Some("I cannot draw that".to_string()),
                images: Vec::new(),
            }),
            Script::Fail => Err(GenerationError::Status {
                provider: self.name.to_string(),
                status: 503,
                body: "upstream overloaded".to_string(),
            }),
            Script::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(GenerationResponse::default())
            }
        }
    }
}

pub fn generators(primary: &Arc<FakeGenerator>, fallback: &Arc<FakeGenerator>) -> Generators {
    Generators {
        primary: primary.clone(),
        fallback: fallback.clone(),
    }
}
