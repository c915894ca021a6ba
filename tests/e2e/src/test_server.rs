use anyhow::Result;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

pub struct TestServer {
    url: String,
    process: Option<Child>,
}

impl TestServer {
    /// Server-rendered pages only, no wasm client.
    pub async fn start() -> Result<Self> {
        let port = get_random_port()?;
        let mut command = Command::new("cargo");
        command.args(["run", "--package", "web", "--features", "server"]);
        Self::launch(command, port, 600).await
    }

    /// Full build through the Dioxus CLI (`dx`): the wasm client hydrates the
    /// page, loads the fragments and handles clicks.
    pub async fn start_with_client() -> Result<Self> {
        let port = get_random_port()?;
        let mut command = Command::new("dx");
        command.args([
            "serve",
            "--package",
            "web",
            "--port",
            &port.to_string(),
            "--open",
            "false",
            "--interactive",
            "false",
        ]);
        // The wasm build takes a while on a cold cache.
        Self::launch(command, port, 6000).await
    }

    async fn launch(mut command: Command, port: u16, attempts: u32) -> Result<Self> {
        // Local mode: form submissions are logged instead of posted.
        let process = command
            .env("SITE_MODE", "local")
            .env("PORT", port.to_string())
            .env("IP", "127.0.0.1")
            .env("SITE_BASE_URL", format!("http://localhost:{}/", port))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let mut server = Self {
            url: format!("http://localhost:{}", port),
            process: Some(process),
        };

        // Killed by Drop when the server never comes up.
        wait_for_server(&server.url, attempts).await?;
        server.url.push('/');

        Ok(server)
    }

    /// Base URL, with a trailing slash.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(mut process) = self.process.take() {
            let _ = process.kill();
        }
    }
}

fn get_random_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    Ok(port)
}

async fn wait_for_server(url: &str, attempts: u32) -> Result<()> {
    for i in 0..attempts {
        if let Ok(response) = reqwest::get(url).await {
            if response.status().is_success() {
                return Ok(());
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;

        if i > 0 && i % 50 == 0 {
            eprintln!("Still waiting for server... ({}s)", i / 10);
        }
    }
    anyhow::bail!("Server did not start in time (waited {}s)", attempts / 10)
}
