use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

const KNOWN_APP_IDS: [(&str, &str); 4] = [
    ("terminal", "Terminal"),
    ("imageGen", "ImageGen"),
    ("settings", "Settings"),
    ("files", "Files"),
];

#[derive(Debug, Deserialize)]
struct AppCatalogFile {
    schema_version: u32,
    apps: Vec<AppEntry>,
}

#[derive(Debug, Deserialize)]
struct AppEntry {
    id: String,
    label: String,
    icon: String,
    color: String,
}

fn variant_for(id: &str) -> &'static str {
    KNOWN_APP_IDS
        .iter()
        .find(|(token, _)| *token == id)
        .map(|(_, variant)| *variant)
        .unwrap_or_else(|| panic!("unknown app id `{id}` in apps.toml"))
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("apps.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: AppCatalogFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if catalog.schema_version != 1 {
        panic!(
            "app catalog schema mismatch in {}: expected 1 found {}",
            path.display(),
            catalog.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for app in &catalog.apps {
        variant_for(&app.id);
        if !seen.insert(app.id.as_str()) {
            panic!("duplicate app id `{}` in apps.toml", app.id);
        }
        if app.label.trim().is_empty() {
            panic!("app `{}` has an empty label", app.id);
        }
        if !app.color.starts_with('#') {
            panic!("app `{}` color must be a hex color, found `{}`", app.id, app.color);
        }
    }
    for (token, _) in KNOWN_APP_IDS {
        if !seen.contains(token) {
            panic!("apps.toml is missing an entry for `{token}`");
        }
    }

    let mut generated = String::new();
    let _ = writeln!(
        generated,
        "/// Build-time generated application catalog, in launcher order.\n\
pub const APP_CATALOG: [AppDescriptor; {}] = [",
        catalog.apps.len()
    );
    for app in &catalog.apps {
        let _ = writeln!(
            generated,
            "    AppDescriptor {{ app_id: AppId::{}, label: {:?}, icon: {:?}, color: {:?} }},",
            variant_for(&app.id),
            app.label,
            app.icon,
            app.color
        );
    }
    generated.push_str("];\n\nconst fn catalog_index(app_id: AppId) -> usize {\n    match app_id {\n");
    for (idx, app) in catalog.apps.iter().enumerate() {
        let _ = writeln!(
            generated,
            "        AppId::{} => {idx},",
            variant_for(&app.id)
        );
    }
    generated.push_str("    }\n}\n");

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
