// Domain modules and components are shared by both targets; the native build
// only exercises them from tests.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod card;
mod content;
mod motion;
mod theme;

#[cfg(any(target_arch = "wasm32", test))]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
mod server;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
