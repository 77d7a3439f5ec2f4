use convolog::configuration::{DatabaseSettings, Settings};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestApp {
    pub address: String,
    pub db_pool: SqlitePool,
    pub db_path: PathBuf,
    // the database lives here; dropped (and removed) together with the app
    _dir: TempDir,
}

// we have to run server in another task
pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("conversations.db");

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let settings = Settings {
        database: DatabaseSettings {
            path: db_path.to_string_lossy().into_owned(),
            max_connections: 5,
        },
        app_port: port,
        app_host: "127.0.0.1".to_string(),
    };

    let db_pool = convolog::startup::prepare_storage(&settings)
        .await
        .expect("Failed to prepare storage");

    let server = convolog::startup::run(listener, db_pool.clone(), settings)
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool,
        db_path,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn post_conversation(&self, body: &Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/api/conversations", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        reqwest::Client::new()
            .delete(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Creates a conversation and returns its id.
    pub async fn create(&self, platform: &str, user_id: Option<&str>) -> i64 {
        let response = self
            .post_conversation(&json!({
                "platform": platform,
                "user_id": user_id,
                "user_message": "hi",
                "ai_response": "hello",
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201);

        let body: Value = response.json().await.unwrap();
        body["data"]["id"].as_i64().expect("id must be an integer")
    }

    pub async fn row_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM conversations")
            .fetch_one(&self.db_pool)
            .await
            .expect("Failed to count rows")
    }
}
