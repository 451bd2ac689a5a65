use eyre::Report;

#[tokio::main]
async fn main() -> Result<(), Report> {
    icetracer::run().await
}
