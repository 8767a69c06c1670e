use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize)]
struct AppManifestFile {
    schema_version: u32,
    apps: Vec<AppManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppManifest {
    id: String,
    name: String,
    icon: String,
    accent: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ProjectManifestFile {
    schema_version: u32,
    projects: Vec<ProjectManifest>,
}

#[derive(Debug, Clone, Deserialize)]
struct ProjectManifest {
    app: String,
    id: String,
    name: String,
    short_desc: String,
    long_desc: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    features: Vec<String>,
    accent: String,
    icon: String,
    repo_url: Option<String>,
    demo_url: Option<String>,
}

#[derive(Debug, Serialize)]
struct DetailLinks {
    repo_url: Option<String>,
    demo_url: Option<String>,
}

#[derive(Debug, Serialize)]
struct DetailRecord {
    id: String,
    name: String,
    short_desc: String,
    long_desc: String,
    tags: Vec<String>,
    features: Vec<String>,
    accent: String,
    icon: String,
    links: DetailLinks,
}

#[derive(Debug, Serialize)]
struct CatalogDetail {
    app: String,
    item: DetailRecord,
}

#[derive(Debug, Serialize)]
struct Catalog {
    apps: Vec<AppManifest>,
    details: Vec<CatalogDetail>,
}

fn is_valid_app_id(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    !raw.is_empty()
        && raw.len() <= 32
        && bytes[0].is_ascii_lowercase()
        && bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        && !raw.ends_with('-')
}

fn read_toml<T: for<'de> Deserialize<'de>>(path: &Path) -> T {
    println!("cargo:rerun-if-changed={}", path.display());
    let raw = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    toml::from_str(&raw).unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()))
}

fn check_schema(path: &Path, found: u32) {
    if found != CATALOG_SCHEMA_VERSION {
        panic!(
            "catalog schema mismatch in {}: expected {CATALOG_SCHEMA_VERSION} found {found}",
            path.display()
        );
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let apps_path = crate_root.join("catalog").join("apps.toml");
    let projects_path = crate_root.join("catalog").join("projects.toml");

    let apps_file: AppManifestFile = read_toml(&apps_path);
    check_schema(&apps_path, apps_file.schema_version);
    let projects_file: ProjectManifestFile = read_toml(&projects_path);
    check_schema(&projects_path, projects_file.schema_version);

    let mut app_ids = HashSet::new();
    for app in &apps_file.apps {
        if !is_valid_app_id(&app.id) {
            panic!("invalid app id `{}` in {}", app.id, apps_path.display());
        }
        if app.name.trim().is_empty() {
            panic!("app `{}` has an empty name", app.id);
        }
        if !app_ids.insert(app.id.clone()) {
            panic!("duplicate app id `{}` in {}", app.id, apps_path.display());
        }
    }

    let mut detail_keys = HashSet::new();
    let mut details = Vec::with_capacity(projects_file.projects.len());
    for project in projects_file.projects {
        if !app_ids.contains(&project.app) {
            panic!(
                "project `{}` references unknown app `{}`",
                project.id, project.app
            );
        }
        if project.id.trim().is_empty() || project.name.trim().is_empty() {
            panic!("project entries need a non-empty id and name");
        }
        if !detail_keys.insert((project.app.clone(), project.id.clone())) {
            panic!(
                "duplicate project id `{}` under app `{}`",
                project.id, project.app
            );
        }
        details.push(CatalogDetail {
            app: project.app,
            item: DetailRecord {
                id: project.id,
                name: project.name,
                short_desc: project.short_desc,
                long_desc: project.long_desc,
                tags: project.tags,
                features: project.features,
                accent: project.accent,
                icon: project.icon,
                links: DetailLinks {
                    repo_url: project.repo_url,
                    demo_url: project.demo_url,
                },
            },
        });
    }

    let catalog = Catalog {
        apps: apps_file.apps,
        details,
    };
    let json = serde_json::to_string_pretty(&catalog).expect("serialize shell catalog");
    let generated = format!(
        "/// Build-time generated app and detail catalog JSON.\n\
pub const SHELL_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("shell_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
