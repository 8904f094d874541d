//! UI preferences
//!
//! Persisted separately from the running game in LocalStorage. The game
//! itself is never saved; a reload always starts a fresh session.

use serde::{Deserialize, Serialize};

/// Where the coin reference list is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UiLayout {
    /// Good/bad coin lists in a sidebar next to the canvas
    #[default]
    Sidebar,
    /// No list; labels appear only in the HUD overlay
    Overlay,
}

impl UiLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiLayout::Sidebar => "Sidebar",
            UiLayout::Overlay => "Overlay",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sidebar" => Some(UiLayout::Sidebar),
            "overlay" => Some(UiLayout::Overlay),
            _ => None,
        }
    }
}

/// Player-facing preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Coin list presentation
    pub layout: UiLayout,
    /// Show the FPS counter in the HUD
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: UiLayout::Sidebar,
            show_fps: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "crypto_dash_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_round_trip() {
        for layout in [UiLayout::Sidebar, UiLayout::Overlay] {
            assert_eq!(UiLayout::from_str(layout.as_str()), Some(layout));
        }
        assert_eq!(UiLayout::from_str("floating"), None);
    }

    #[test]
    fn test_settings_serde_round_trip() {
        let settings = Settings {
            layout: UiLayout::Overlay,
            show_fps: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.layout, UiLayout::Overlay);
        assert!(back.show_fps);
    }
}
