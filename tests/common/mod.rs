use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use happyteeth::{
    app,
    auth::Hasher,
    db,
    notify::{ConfirmationSnapshot, Delivery, Notifier},
    AppState,
};

pub struct RecordingNotifier {
    outcome: Delivery,
    recipients: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn recipients(&self) -> Vec<String> {
        self.recipients.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_confirmation(&self, _snapshot: &ConfirmationSnapshot, recipient: &str) -> Delivery {
        self.recipients.lock().unwrap().push(recipient.to_owned());
        self.outcome.clone()
    }
}

pub struct TestApp {
    pub base: String,
    pub client: reqwest::Client,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

/// Serves the full router on an ephemeral port over an in-memory database.
pub async fn spawn(outcome: Delivery) -> TestApp {
    let db_pool = db::connect("sqlite::memory:", 1).await.unwrap();
    let notifier = Arc::new(RecordingNotifier { outcome, recipients: Mutex::new(Vec::new()) });
    let app_state = AppState::new(db_pool, notifier.clone(), Hasher::minimal().unwrap());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(app_state)).await.unwrap();
    });

    TestApp {
        base: format!("http://{addr}"),
        client: reqwest::Client::new(),
        notifier,
    }
}
