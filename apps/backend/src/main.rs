#[tokio::main]
async fn main() -> anyhow::Result<()> {
    exam_export_backend::run().await
}
