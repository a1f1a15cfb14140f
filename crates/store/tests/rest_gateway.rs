//! Black-box tests for the REST gateway against a canned-response store.
//!
//! The stub binds an ephemeral port, records each request line, and answers
//! every request with a fixed JSON row set, so the tests can assert which
//! calls the gateway makes as well as what it returns.

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use flipstock_core::{DomainError, ItemId};
use flipstock_inventory::{ItemPatch, ItemStatus};
use flipstock_store::{ItemStore, RestItemStore, StoreConfig, StoreError};
use rust_decimal_macros::dec;

const ITEM_ID: &str = "0188e390-0000-7000-8000-000000000001";

fn row(status: &str) -> String {
    format!(
        r#"[{{"id":"{ITEM_ID}","name":"lamp","cost":10.0,"price":25.0,"status":"{status}","created_at":"2026-08-30T12:00:00Z"}}]"#
    )
}

struct StubStore {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: tokio::task::JoinHandle<()>,
}

impl StubStore {
    /// Serve `read_body` to GETs and `write_body` to PATCHes.
    async fn spawn(read_body: String, write_body: String) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let requests: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let seen = requests.clone();

        let handle = tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let seen = seen.clone();
                let read_body = read_body.clone();
                let write_body = write_body.clone();
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 16 * 1024];
                    let mut len = 0;
                    loop {
                        match socket.read(&mut buf[len..]).await {
                            Ok(0) | Err(_) => break,
                            Ok(n) => {
                                len += n;
                                if buf[..len].windows(4).any(|w| w == b"\r\n\r\n")
                                    || len == buf.len()
                                {
                                    break;
                                }
                            }
                        }
                    }
                    let head = String::from_utf8_lossy(&buf[..len]);
                    let request_line = head.lines().next().unwrap_or_default().to_string();
                    let body = if request_line.starts_with("PATCH") {
                        write_body
                    } else {
                        read_body
                    };
                    seen.lock().unwrap().push(request_line);
                    let response = format!(
                        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        body.len(),
                        body,
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
            handle,
        }
    }

    fn store(&self) -> RestItemStore {
        RestItemStore::new(StoreConfig::new(self.base_url.clone(), "test-key"))
    }

    fn request_lines(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for StubStore {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn item_id() -> ItemId {
    ITEM_ID.parse().unwrap()
}

#[tokio::test]
async fn unselling_a_sold_row_fails_before_any_write() {
    let stub = StubStore::spawn(row("sold"), row("available")).await;
    let patch = ItemPatch {
        status: Some(ItemStatus::Available),
        ..ItemPatch::default()
    };

    let err = stub.store().update(item_id(), patch).await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::Domain(DomainError::InvalidTransition(_))
    ));

    let lines = stub.request_lines();
    assert_eq!(lines.len(), 1, "expected a single read, got {lines:?}");
    assert!(lines[0].starts_with("GET "));
}

#[tokio::test]
async fn re_selling_a_sold_row_fails_before_any_write() {
    let stub = StubStore::spawn(row("sold"), row("sold")).await;

    let err = stub
        .store()
        .update(item_id(), ItemPatch::sold())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Domain(DomainError::InvalidTransition(_))
    ));

    let lines = stub.request_lines();
    assert_eq!(lines.len(), 1, "expected a single read, got {lines:?}");
    assert!(lines[0].starts_with("GET "));
}

#[tokio::test]
async fn selling_an_available_row_issues_the_patch() {
    let stub = StubStore::spawn(row("available"), row("sold")).await;

    let item = stub
        .store()
        .update(item_id(), ItemPatch::sold())
        .await
        .unwrap();
    assert_eq!(item.status, ItemStatus::Sold);

    let lines = stub.request_lines();
    assert_eq!(lines.len(), 2, "expected read then write, got {lines:?}");
    assert!(lines[0].starts_with("GET "));
    assert!(lines[1].starts_with("PATCH "));
}

#[tokio::test]
async fn status_patch_against_a_missing_row_is_not_found() {
    let stub = StubStore::spawn("[]".to_string(), "[]".to_string()).await;

    let err = stub
        .store()
        .update(item_id(), ItemPatch::sold())
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let lines = stub.request_lines();
    assert_eq!(lines.len(), 1, "expected a single read, got {lines:?}");
    assert!(lines[0].starts_with("GET "));
}

#[tokio::test]
async fn price_only_patch_writes_without_a_pre_read() {
    let stub = StubStore::spawn(row("available"), row("available")).await;

    stub.store()
        .update(item_id(), ItemPatch::with_price(dec!(30)))
        .await
        .unwrap();

    let lines = stub.request_lines();
    assert_eq!(lines.len(), 1, "expected a single write, got {lines:?}");
    assert!(lines[0].starts_with("PATCH "));
}

#[tokio::test]
async fn empty_patch_reads_instead_of_writing() {
    let stub = StubStore::spawn(row("available"), row("sold")).await;

    let item = stub
        .store()
        .update(item_id(), ItemPatch::default())
        .await
        .unwrap();
    assert_eq!(item.status, ItemStatus::Available);

    let lines = stub.request_lines();
    assert_eq!(lines.len(), 1, "expected a single read, got {lines:?}");
    assert!(lines[0].starts_with("GET "));
}
