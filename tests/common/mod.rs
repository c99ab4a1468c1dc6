use reqwest::Client;
use task_service::config::AppConfig;
use task_service::services::MongoDb;
use task_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        if std::env::var("MONGODB_URI").is_err() {
            std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");
        }

        let db_name = format!("todo_test_{}", Uuid::new_v4());

        let mut config = AppConfig::load().expect("Failed to load configuration");
        config.http.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to come up by polling the liveness route
        let client = Client::new();
        let liveness_url = format!("{}/", address);
        for _ in 0..50 {
            if client.get(&liveness_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            client,
            db,
            db_name,
        }
    }

    /// Insert a user through the API and return its identifier.
    pub async fn create_user(&self, email: &str) -> String {
        let response = self
            .client
            .post(format!("{}/users", self.address))
            .json(&serde_json::json!({ "email": email, "name": "Test User" }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success());

        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        body["insertedId"]
            .as_str()
            .expect("insertedId missing from insert acknowledgment")
            .to_string()
    }

    /// Insert a task through the API and return its identifier.
    pub async fn create_task(&self, task: &serde_json::Value) -> String {
        let response = self
            .client
            .post(format!("{}/tasks", self.address))
            .json(task)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        body["insertedId"]
            .as_str()
            .expect("insertedId missing from insert acknowledgment")
            .to_string()
    }

    /// Cleanup test resources (drops the per-test database).
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
