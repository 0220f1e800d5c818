// Portfolio Landing - Dev Server
// Serves the static site directory; no routing beyond path -> file.

use portfolio_site::fileserver::{self, DEFAULT_PORT};
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    println!("🌐 Portfolio Landing - Dev Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let root = PathBuf::from("site");

    if !root.is_dir() {
        eprintln!("❌ Document root not found at {:?}", root);
        eprintln!("   Run the server from the repository root.");
        std::process::exit(1);
    }

    println!("✓ Serving {:?}", root);
    println!("\n🚀 http://localhost:{}", DEFAULT_PORT);
    println!("\n   Press Ctrl+C to stop\n");

    if let Err(e) = fileserver::serve(root, DEFAULT_PORT).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
