use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct CategoryTotal {
    category: String,
    minutes: u64,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    total_minutes: u64,
    tier: String,
    categories: Vec<CategoryTotal>,
}

impl SummaryResponse {
    fn minutes(&self, category: &str) -> u64 {
        self.categories
            .iter()
            .find(|total| total.category == category)
            .map(|total| total.minutes)
            .unwrap_or_default()
    }
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/health")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_fitness_tracker"))
        .env("PORT", port.to_string())
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn fetch_summary(client: &Client, base_url: &str) -> SummaryResponse {
    client
        .get(format!("{base_url}/api/summary"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_form_add_updates_summary() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = fetch_summary(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/add", server.base_url))
        .form(&[("category", "Workout"), ("exercise", "Pushups"), ("duration", "20")])
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let page = response.text().await.unwrap();
    assert!(page.contains("added successfully!"));

    let after = fetch_summary(&client, &server.base_url).await;
    assert_eq!(after.minutes("Workout"), before.minutes("Workout") + 20);
    assert_eq!(after.minutes("Warm-up"), before.minutes("Warm-up"));
    assert_eq!(after.total_minutes, before.total_minutes + 20);
    assert_ne!(after.tier, "empty");
}

#[tokio::test]
async fn http_invalid_form_leaves_summary_unchanged() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = fetch_summary(&client, &server.base_url).await;

    let page = client
        .post(format!("{}/add", server.base_url))
        .form(&[("category", "Workout"), ("exercise", "Run"), ("duration", "abc")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("Duration must be a number."));

    let response = client
        .post(format!("{}/api/workouts", server.base_url))
        .json(&serde_json::json!({ "exercise": "Run", "duration": "-5" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let after = fetch_summary(&client, &server.base_url).await;
    assert_eq!(after.total_minutes, before.total_minutes);
}
