//! Entry point for the WASM application

fn main() {
    memberdashboard::start();
}
