/// Hands playable links to something that can show them.
///
/// In the browser the page owns the overlay iframe, so this only logs.
/// Natively the link goes to the system browser.
#[derive(Clone, Default)]
pub struct Player {
    last_link: Option<String>,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn play(&mut self, link: &str) -> Result<(), anyhow::Error> {
        if !(link.starts_with("http://") || link.starts_with("https://")) {
            return Err(anyhow::anyhow!("Not a playable link: {}", link));
        }
        webbrowser::open(link)
            .map_err(|e| anyhow::anyhow!("Failed to open browser for {}: {}", link, e))?;
        tracing::info!("Opened {} in browser", link);
        self.last_link = Some(link.to_string());
        Ok(())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn play(&mut self, link: &str) -> Result<(), anyhow::Error> {
        web_sys::console::log_1(&format!("Playing {}", link).into());
        self.last_link = Some(link.to_string());
        Ok(())
    }

    pub fn stop(&mut self) {
        self.last_link = None;
    }

    pub fn now_playing(&self) -> Option<&str> {
        self.last_link.as_deref()
    }
}
