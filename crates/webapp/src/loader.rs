//! One-shot catalog load.
//!
//! The fetch runs as its own task and hands its outcome back as an
//! [`Action`] over a channel, so the view keeps handling input while the
//! request is in flight. Two guards keep a torn-down view from being updated:
//! a closed channel means the outcome is dropped, and dropping the
//! [`CatalogLoad`] handle aborts the task.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::catalog::CatalogClient;
use crate::state::Action;

/// Handle to an in-flight catalog fetch. Aborts the fetch when dropped.
#[derive(Debug)]
pub struct CatalogLoad {
    task: JoinHandle<()>,
}

impl CatalogLoad {
    /// Start fetching the catalog; the outcome is sent on `updates`.
    ///
    /// Exactly one fetch is made. Failures are logged here and reported as
    /// [`Action::ProductsFetchFailed`]; nothing is retried.
    #[must_use]
    pub fn spawn(client: CatalogClient, updates: mpsc::Sender<Action>) -> Self {
        let task = tokio::spawn(async move {
            let action = match client.list_products().await {
                Ok(products) => Action::ProductsLoaded(products),
                Err(e) => {
                    tracing::error!(error = %e, "Error fetching products");
                    Action::ProductsFetchFailed(e.to_string())
                }
            };

            if updates.send(action).await.is_err() {
                tracing::debug!("View dropped before the catalog load finished");
            }
        });

        Self { task }
    }

    /// Whether the fetch task has finished (delivered, discarded, or aborted).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for CatalogLoad {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::net::SocketAddr;
    use std::time::Duration;

    use axum::{Router, routing::get};
    use tinyshop_core::Product;
    use url::Url;

    use super::*;

    const LAPTOP_JSON: &str = r#"[{"id":1,"name":"Laptop"}]"#;

    fn client_for(addr: SocketAddr) -> CatalogClient {
        CatalogClient::new(&Url::parse(&format!("http://{addr}")).unwrap()).unwrap()
    }

    async fn unused_addr() -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    }

    #[tokio::test]
    async fn test_delivers_products() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = Router::new().route("/products", get(|| async { LAPTOP_JSON }));
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let (tx, mut rx) = mpsc::channel(1);
        let _load = CatalogLoad::spawn(client_for(addr), tx);

        match rx.recv().await.unwrap() {
            Action::ProductsLoaded(products) => {
                assert_eq!(products, vec![Product::new(1, "Laptop")]);
            }
            other => panic!("unexpected action: {other:?}"),
        }
        // One fetch, one outcome.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_reports_failure() {
        let (tx, mut rx) = mpsc::channel(1);
        let _load = CatalogLoad::spawn(client_for(unused_addr().await), tx);

        assert!(matches!(
            rx.recv().await.unwrap(),
            Action::ProductsFetchFailed(_)
        ));
    }

    #[tokio::test]
    async fn test_closed_receiver_discards_outcome() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let load = CatalogLoad::spawn(client_for(unused_addr().await), tx);
        tokio::time::timeout(Duration::from_secs(10), async {
            while !load.is_finished() {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_drop_aborts_pending_fetch() {
        // A listener that accepts connections but never answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (tx, mut rx) = mpsc::channel(1);
        let load = CatalogLoad::spawn(client_for(addr), tx);
        drop(load);

        // The aborted task drops its sender without sending anything.
        let outcome = tokio::time::timeout(Duration::from_secs(10), rx.recv())
            .await
            .unwrap();
        assert!(outcome.is_none());
        drop(listener);
    }
}
