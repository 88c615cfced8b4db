#![allow(dead_code)]

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A server spawned for one test.
pub struct TestApp {
    pub address: String,
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl TestApp {
    /// Triggers graceful shutdown and waits for the server task to finish.
    pub async fn shutdown(self) -> std::io::Result<()> {
        let _ = self.shutdown_tx.send(());
        self.handle.await.expect("Server task panicked")
    }
}

/// Spawns the application on a random local port.
pub async fn spawn_app() -> TestApp {
    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");

    let port = listener.local_addr().unwrap().port();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        hello_service::serve(listener, async {
            let _ = shutdown_rx.await;
        })
        .await
    });

    TestApp {
        address: format!("http://127.0.0.1:{port}"),
        shutdown_tx,
        handle,
    }
}
