//! Installed-app registry and per-app detail catalog.
//!
//! The catalog is configuration: `catalog/*.toml` is validated by the build script and embedded as
//! JSON, then parsed once into an [`AppRegistry`] the reducer consults for id validation.

use std::sync::OnceLock;

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{AppId, DetailItem, IconRef};

include!(concat!(env!("OUT_DIR"), "/shell_catalog_generated.rs"));

/// Number of cards shown in the app switcher's recent-apps strip.
pub const SWITCHER_CARD_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Launcher entry for one installed app. Its content comes from [`crate::render_app_contents`].
pub struct AppDescriptor {
    pub id: AppId,
    /// Label under the launcher tile and in the app header.
    pub name: String,
    pub icon: IconRef,
    /// CSS background for the launcher tile and switcher preview.
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CatalogDetail {
    app: AppId,
    item: DetailItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct CatalogDocument {
    apps: Vec<AppDescriptor>,
    #[serde(default)]
    details: Vec<CatalogDetail>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a catalog is rejected.
pub enum CatalogError {
    #[error("catalog json is malformed: {0}")]
    Malformed(String),
    #[error("duplicate app id `{0}`")]
    DuplicateApp(AppId),
    #[error("detail `{item}` references unknown app `{app}`")]
    OrphanDetail { app: AppId, item: String },
}

/// Fixed, ordered set of installed apps plus the detail records each app exposes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppRegistry {
    apps: Vec<AppDescriptor>,
    details: Vec<CatalogDetail>,
}

impl AppRegistry {
    /// Builds a registry, rejecting duplicate ids and details that point at missing apps.
    pub fn new(
        apps: Vec<AppDescriptor>,
        details: Vec<(AppId, DetailItem)>,
    ) -> Result<Self, CatalogError> {
        let details = details
            .into_iter()
            .map(|(app, item)| CatalogDetail { app, item })
            .collect();
        Self::validated(apps, details)
    }

    /// Parses the JSON catalog shape emitted by the build script.
    pub fn from_catalog_json(raw: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(raw).map_err(|err| CatalogError::Malformed(err.to_string()))?;
        Self::validated(document.apps, document.details)
    }

    /// Returns the registry built from the embedded catalog.
    pub fn builtin() -> &'static AppRegistry {
        static REGISTRY: OnceLock<AppRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            Self::from_catalog_json(SHELL_CATALOG_JSON).unwrap_or_else(|err| {
                logging::warn!("embedded shell catalog rejected: {err}");
                AppRegistry::default()
            })
        })
    }

    fn validated(
        apps: Vec<AppDescriptor>,
        details: Vec<CatalogDetail>,
    ) -> Result<Self, CatalogError> {
        for (idx, app) in apps.iter().enumerate() {
            if apps[..idx].iter().any(|other| other.id == app.id) {
                return Err(CatalogError::DuplicateApp(app.id.clone()));
            }
        }
        if let Some(orphan) = details
            .iter()
            .find(|detail| !apps.iter().any(|app| app.id == detail.app))
        {
            return Err(CatalogError::OrphanDetail {
                app: orphan.app.clone(),
                item: orphan.item.id.clone(),
            });
        }
        Ok(Self { apps, details })
    }

    /// Installed apps in launcher order.
    pub fn apps(&self) -> &[AppDescriptor] {
        &self.apps
    }

    /// Returns `true` when `app_id` names an installed app.
    pub fn contains(&self, app_id: &AppId) -> bool {
        self.descriptor(app_id).is_some()
    }

    /// Returns the descriptor of an installed app.
    pub fn descriptor(&self, app_id: &AppId) -> Option<&AppDescriptor> {
        self.apps.iter().find(|app| &app.id == app_id)
    }

    /// Index of the app in registry order.
    pub fn position(&self, app_id: &AppId) -> Option<usize> {
        self.apps.iter().position(|app| &app.id == app_id)
    }

    /// Detail records of `app_id`, in catalog order. The iterator borrows only the registry.
    pub fn details_for<'a>(&'a self, app_id: &AppId) -> impl Iterator<Item = &'a DetailItem> + 'a {
        let app_id = app_id.clone();
        self.details
            .iter()
            .filter(move |detail| detail.app == app_id)
            .map(|detail| &detail.item)
    }

    /// Looks up one detail record of `app_id` by its item id.
    pub fn detail(&self, app_id: &AppId, item_id: &str) -> Option<&DetailItem> {
        self.details
            .iter()
            .find(|detail| &detail.app == app_id && detail.item.id == item_id)
            .map(|detail| &detail.item)
    }

    /// Apps shown as cards in the recent-apps switcher: the first [`SWITCHER_CARD_LIMIT`].
    pub fn switcher_apps(&self) -> &[AppDescriptor] {
        &self.apps[..self.apps.len().min(SWITCHER_CARD_LIMIT)]
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::test_support::{descriptor, detail, registry};
    use super::*;

    #[test]
    fn embedded_catalog_parses_with_expected_apps_in_order() {
        let registry = AppRegistry::from_catalog_json(SHELL_CATALOG_JSON).expect("catalog");
        let ids: Vec<&str> = registry.apps().iter().map(|app| app.id.as_str()).collect();
        assert_eq!(ids, vec!["about", "skills", "projects", "education", "contact"]);
        assert_eq!(
            registry.details_for(&AppId::trusted("projects")).count(),
            7
        );
        let gym = registry
            .detail(&AppId::trusted("projects"), "iron-forge-gym")
            .expect("gym project");
        assert!(gym.links.repo_url.is_some());
        assert_eq!(gym.links.demo_url, None);
    }

    #[test]
    fn switcher_shows_first_three_apps() {
        let registry = registry();
        let ids: Vec<&str> = registry
            .switcher_apps()
            .iter()
            .map(|app| app.id.as_str())
            .collect();
        assert_eq!(ids, vec!["about", "skills", "projects"]);
    }

    #[test]
    fn registry_rejects_duplicates_and_orphan_details() {
        let duplicate = AppRegistry::new(vec![descriptor("about"), descriptor("about")], vec![]);
        assert_eq!(
            duplicate,
            Err(CatalogError::DuplicateApp(AppId::trusted("about")))
        );

        let orphan = AppRegistry::new(
            vec![descriptor("about")],
            vec![(AppId::trusted("projects"), detail("p1"))],
        );
        assert!(matches!(orphan, Err(CatalogError::OrphanDetail { .. })));
    }

    #[test]
    fn detail_lookup_outlives_a_temporary_app_id() {
        let registry = registry();
        let found = registry.detail(&AppId::trusted("projects"), "p2");
        assert_eq!(found.map(|item| item.name.as_str()), Some("P2"));
        assert_eq!(registry.detail(&AppId::trusted("about"), "p2"), None);

        let names: Vec<&str> = registry
            .details_for(&AppId::trusted("projects"))
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(names, vec!["p1", "p2"]);
    }

    #[test]
    fn malformed_catalog_json_is_reported() {
        let err = AppRegistry::from_catalog_json("{\"apps\": 3}").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn lookups_follow_registry_order() {
        let registry = registry();
        assert_eq!(registry.position(&AppId::trusted("projects")), Some(2));
        assert!(registry.contains(&AppId::trusted("contact")));
        assert!(!registry.contains(&AppId::trusted("does-not-exist")));
        assert_eq!(registry.details_for(&AppId::trusted("about")).count(), 0);
    }
}
