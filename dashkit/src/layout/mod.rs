//! Dashboard layout context: sidebar state and the colour theme.
//!
//! The context is an ordinary value owned by the caller; theme persistence
//! and the platform preference are injected.

mod storage;

use std::fmt;
use std::sync::Arc;

use crate::error::StorageError;

pub use storage::{FileThemeStorage, MemoryThemeStorage, ThemeStorage};

/// Storage key holding the saved theme.
pub const THEME_KEY: &str = "theme";

/// Colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Reports the platform's colour-scheme preference.
pub trait ThemeDetector: Send + Sync {
    fn prefers_dark(&self) -> bool;
}

impl<F> ThemeDetector for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn prefers_dark(&self) -> bool {
        self()
    }
}

/// Sidebar and theme state of the dashboard shell.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use dashkit::layout::{LayoutContext, MemoryThemeStorage, Theme, ThemeStorage};
///
/// let storage = Arc::new(MemoryThemeStorage::new());
/// let mut layout = LayoutContext::new(storage.clone(), Arc::new(|| false));
///
/// layout.toggle_dark_mode()?;
/// assert_eq!(layout.theme(), Theme::Dark);
/// assert_eq!(storage.get("theme")?.as_deref(), Some("dark"));
/// # Ok::<(), dashkit::error::StorageError>(())
/// ```
pub struct LayoutContext {
    sidebar_collapsed: bool,
    sidebar_open: bool,
    dark_mode: bool,
    storage: Arc<dyn ThemeStorage>,
    detector: Arc<dyn ThemeDetector>,
}

impl LayoutContext {
    /// Creates a context with everything off.
    pub fn new(storage: Arc<dyn ThemeStorage>, detector: Arc<dyn ThemeDetector>) -> Self {
        Self {
            sidebar_collapsed: false,
            sidebar_open: false,
            dark_mode: false,
            storage,
            detector,
        }
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    /// Whether the mobile sidebar is open.
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode { Theme::Dark } else { Theme::Light }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn toggle_mobile_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Flips the theme and saves it.
    ///
    /// The in-memory theme changes even if saving fails.
    pub fn toggle_dark_mode(&mut self) -> Result<(), StorageError> {
        self.dark_mode = !self.dark_mode;
        let theme = self.theme();
        log::debug!("Theme switched to {}", theme.as_str());
        self.storage.set(THEME_KEY, theme.as_str())
    }

    /// Loads the theme: a saved `"dark"` or any other saved value decides;
    /// with nothing saved the detector's preference is used.
    pub fn init_theme(&mut self) -> Result<(), StorageError> {
        let saved = self.storage.get(THEME_KEY)?;
        self.dark_mode = match saved.as_deref() {
            Some("dark") => true,
            Some(saved) if !saved.is_empty() => false,
            _ => self.detector.prefers_dark(),
        };
        log::debug!("Theme initialised to {}", self.theme().as_str());
        Ok(())
    }
}

impl fmt::Debug for LayoutContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutContext")
            .field("sidebar_collapsed", &self.sidebar_collapsed)
            .field("sidebar_open", &self.sidebar_open)
            .field("dark_mode", &self.dark_mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(storage: Arc<MemoryThemeStorage>, prefers_dark: bool) -> LayoutContext {
        LayoutContext::new(storage, Arc::new(move || prefers_dark))
    }

    #[test]
    fn test_saved_theme_wins() {
        let storage = Arc::new(MemoryThemeStorage::new());
        storage.set(THEME_KEY, "light").unwrap();
        let mut layout = context(storage, true);
        layout.init_theme().unwrap();
        assert!(!layout.dark_mode());
    }

    #[test]
    fn test_detector_used_without_saved_theme() {
        let mut layout = context(Arc::new(MemoryThemeStorage::new()), true);
        layout.init_theme().unwrap();
        assert_eq!(layout.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_dark_mode_persists_both_ways() {
        let storage = Arc::new(MemoryThemeStorage::new());
        let mut layout = context(storage.clone(), false);

        layout.toggle_dark_mode().unwrap();
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        layout.toggle_dark_mode().unwrap();
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_sidebar_toggles() {
        let mut layout = context(Arc::new(MemoryThemeStorage::new()), false);
        layout.toggle_sidebar();
        layout.toggle_mobile_sidebar();
        assert!(layout.sidebar_collapsed());
        assert!(layout.sidebar_open());
        layout.toggle_sidebar();
        assert!(!layout.sidebar_collapsed());
    }
}
