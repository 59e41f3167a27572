use docqa_shared::ClientConfig;
use web_sys::window;

/// Get the base HTTP URL (e.g., "http://localhost:5000" or "https://myapp.com")
pub fn get_base_url() -> String {
    let Some(window) = window() else {
        return "http://localhost".to_string();
    };
    let location = window.location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "localhost".to_string());

    format!("{}//{}", protocol, host)
}

/// Client configuration for the page's own origin
pub fn client_config() -> ClientConfig {
    ClientConfig::new(get_base_url())
}

/// Blocking browser alert
pub fn alert(message: &str) {
    gloo::dialogs::alert(message);
}
