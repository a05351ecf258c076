//! Lab Settings entry point
//!
//! On the web the library is loaded as a module and `wasm::start` runs on
//! load. Natively this prints the effective default settings, and the
//! server flags found in a `Cookie:` header passed as the first argument,
//! e.g. `lab-settings "lab_server_settings=r.1_e.0; theme=dark"`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lab_settings::platform::{MemoryStore, StaticCookies};
    use lab_settings::{ServerSettings, SettingsManager};

    env_logger::init();
    log::info!("Lab Settings (native) starting...");
    log::info!("Native mode keeps settings in memory - build for wasm32 to use LocalStorage");

    let manager = SettingsManager::new(MemoryStore::new());
    match serde_json::to_string_pretty(&manager.effective()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to render settings: {}", e),
    }

    if let Some(header) = std::env::args().nth(1) {
        let cookies = StaticCookies::from_header(&header);
        let server = ServerSettings::from_cookies(&cookies);
        println!(
            "registration enabled: {}",
            server.is_user_registration_enabled()
        );
        println!("data export enabled: {}", server.is_data_exporting_enabled());
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is lab_settings::wasm::start, this is just to satisfy the compiler
}
