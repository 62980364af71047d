// src/bin/serve.rs
use match_panel::{config::options::AppOptions, log, server};

#[tokio::main]
async fn main() {
    log::init("info");
    if let Err(e) = server::serve(AppOptions::from_env()).await {
        eprintln!("Server failed: {e}");
        std::process::exit(1);
    }
}
