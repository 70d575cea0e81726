#[tokio::main]
async fn main() {
    if let Err(err) = care_engine_api::run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
