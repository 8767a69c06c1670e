use serde::{Deserialize, Serialize};

/// Upper bound of boot progress; reaching it arms the ready transition.
pub const BOOT_PROGRESS_MAX: u8 = 100;

/// Identifier of an app installed in the shell registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AppId(String);

impl AppId {
    /// Returns an app identifier when `raw` is a lowercase kebab-case token.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_app_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid app id `{raw}`; expected a lowercase kebab-case token"
            ))
        }
    }

    /// Creates an id without validation for catalog constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the id as written in the catalog.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for AppId {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<AppId> for String {
    fn from(id: AppId) -> Self {
        id.0
    }
}

fn is_valid_app_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 32 {
        return false;
    }
    let bytes = raw.as_bytes();
    if !bytes[0].is_ascii_lowercase() {
        return false;
    }
    if !bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
    {
        return false;
    }
    !raw.ends_with('-')
}

/// Opaque icon token rendered by the shell chrome (a glyph today).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(pub String);

impl IconRef {
    /// Text drawn in place of an icon image.
    pub fn glyph(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Outbound links of a detail record. A missing link renders a placeholder button.
pub struct ExternalLinks {
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
}

/// Drill-down record selected from inside an app (one project entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailItem {
    pub id: String,
    pub name: String,
    pub short_desc: String,
    pub long_desc: String,
    /// Tech stack, in display order.
    pub tags: Vec<String>,
    /// Feature bullets, in display order.
    pub features: Vec<String>,
    /// CSS background of the detail icon.
    pub accent: String,
    pub icon: IconRef,
    pub links: ExternalLinks,
}

/// Transient panel drawn above the home or app screen. At most one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    /// Notification shade; quick settings expand inside it and cannot exist without it.
    Notifications { quick_settings_expanded: bool },
    AppSwitcher,
}

impl Overlay {
    /// Returns `true` when any overlay is drawn.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns `true` only while the shade is open with quick settings expanded.
    pub fn quick_settings_expanded(self) -> bool {
        matches!(
            self,
            Self::Notifications {
                quick_settings_expanded: true
            }
        )
    }
}

/// Screen-level navigation position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Navigation {
    #[default]
    Home,
    AppOpen(AppId),
    /// Detail view; `return_to` is the app it was opened from, so back always has a target.
    DetailOpen { item: DetailItem, return_to: AppId },
}

impl Navigation {
    /// App whose content is on screen, including the app behind an open detail.
    pub fn active_app(&self) -> Option<&AppId> {
        match self {
            Self::Home => None,
            Self::AppOpen(app_id) => Some(app_id),
            Self::DetailOpen { return_to, .. } => Some(return_to),
        }
    }

    /// Detail record on screen, if any.
    pub fn detail(&self) -> Option<&DetailItem> {
        match self {
            Self::DetailOpen { item, .. } => Some(item),
            _ => None,
        }
    }

    /// Navigation position restored by popping a detail view.
    pub fn return_target(&self) -> Option<Navigation> {
        match self {
            Self::DetailOpen { return_to, .. } => Some(Self::AppOpen(return_to.clone())),
            _ => None,
        }
    }
}

/// Boot screen progress. `Ready` is entered once and never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Booting { progress: u8 },
    Ready,
}

impl Default for BootPhase {
    fn default() -> Self {
        Self::Booting { progress: 0 }
    }
}

impl BootPhase {
    /// Returns `true` once the boot screen is gone.
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Percentage shown by the boot screen; `Ready` reports a full bar.
    pub fn progress(self) -> u8 {
        match self {
            Self::Booting { progress } => progress,
            Self::Ready => BOOT_PROGRESS_MAX,
        }
    }
}

/// The only mutable shell entity. A fresh instance is created per mounted shell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShellState {
    pub overlay: Overlay,
    pub navigation: Navigation,
    pub boot: BootPhase,
}

impl ShellState {
    /// Returns `true` when no app or detail is open.
    pub fn is_home(&self) -> bool {
        matches!(self.navigation, Navigation::Home)
    }
}

/// Pointer location in client (viewport) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn app_id_accepts_kebab_tokens_and_rejects_the_rest() {
        assert!(AppId::new("projects").is_ok());
        assert!(AppId::new("side-quests2").is_ok());
        assert!(AppId::new("").is_err());
        assert!(AppId::new("Projects").is_err());
        assert!(AppId::new("2fa").is_err());
        assert!(AppId::new("trailing-").is_err());
        assert!(AppId::new("with space").is_err());
        assert!(AppId::new("a".repeat(33)).is_err());
    }

    #[test]
    fn app_id_deserialization_validates() {
        let parsed: AppId = serde_json::from_str("\"contact\"").expect("valid id");
        assert_eq!(parsed, AppId::trusted("contact"));
        assert!(serde_json::from_str::<AppId>("\"Bad Id\"").is_err());
    }

    #[test]
    fn fresh_state_is_home_without_overlay_and_booting_from_zero() {
        let state = ShellState::default();
        assert_eq!(state.overlay, Overlay::None);
        assert_eq!(state.navigation, Navigation::Home);
        assert_eq!(state.boot, BootPhase::Booting { progress: 0 });
    }

    #[test]
    fn detail_navigation_reports_its_return_target() {
        let item = DetailItem {
            id: "p1".to_string(),
            name: "P1".to_string(),
            short_desc: String::new(),
            long_desc: String::new(),
            tags: Vec::new(),
            features: Vec::new(),
            accent: String::new(),
            icon: IconRef("*".to_string()),
            links: ExternalLinks::default(),
        };
        let nav = Navigation::DetailOpen {
            item,
            return_to: AppId::trusted("projects"),
        };
        assert_eq!(
            nav.return_target(),
            Some(Navigation::AppOpen(AppId::trusted("projects")))
        );
        assert_eq!(nav.active_app(), Some(&AppId::trusted("projects")));
        assert_eq!(Navigation::Home.return_target(), None);
    }
}
