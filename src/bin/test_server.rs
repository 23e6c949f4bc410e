use scanorama_test_servers::{server, Component};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    scanorama_test_servers::init();

    server::run(Component::TestServer).await
}
