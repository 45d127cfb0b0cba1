// Cross-platform helper: open a URL with the system default browser.

/// Open URL in the system default browser. Spawn failures are logged; there is
/// no retry, navigation is the OS's business from here.
pub fn open_in_browser(url: &str) {
    #[cfg(target_os = "windows")]
    {
        // explorer resolves the default browser without going through a shell
        if let Err(e) = std::process::Command::new("explorer").arg(url).spawn() {
            log::error!("Failed to open browser for {}: {}", url, e);
        }
    }
    #[cfg(target_os = "macos")]
    {
        if let Err(e) = std::process::Command::new("open").arg(url).spawn() {
            log::error!("Failed to open browser for {}: {}", url, e);
        }
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        if let Err(e) = std::process::Command::new("xdg-open").arg(url).spawn() {
            log::error!("Failed to open browser for {}: {}", url, e);
        }
    }
}
