// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the static export and site config

use origen_site::config::SiteConfig;
use origen_site::i18n::CatalogStore;
use origen_site::pages::RenderOptions;
use origen_site::report::ReportOutputFormat;
use origen_site::storage::{self, MANIFEST_FILE};
use std::fs;
use tempfile::TempDir;

fn write_site(root: &std::path::Path) {
    let messages = root.join("messages");
    fs::create_dir_all(&messages).unwrap();
    fs::write(
        messages.join("th.json"),
        r#"{"blogPage": {"posts": [{"slug": "trip-a", "title": "ญี่ปุ่น"}, {"slug": "th-only", "title": "เฉพาะไทย"}]}}"#,
    )
    .unwrap();
    fs::write(
        messages.join("en.json"),
        r#"{"blogPage": {"posts": [{"slug": "trip-a", "title": "Japan"}]}}"#,
    )
    .unwrap();
    fs::write(
        root.join("site.yaml"),
        "locales: [th, en]\ndefault_locale: th\nmessages_dir: messages\noutput_dir: out\n",
    )
    .unwrap();
}

#[test]
fn test_export_writes_pages_and_manifest() {
    let dir = TempDir::new().unwrap();
    write_site(dir.path());

    let config = SiteConfig::load(&dir.path().join("site.yaml")).unwrap();
    assert_eq!(config.output_dir, dir.path().join("out"));

    let store = CatalogStore::load_all(config.registry().unwrap(), &config.messages_dir).unwrap();
    let options = RenderOptions::new(config.posts_section.clone());
    let manifest =
        storage::export_site(&store, &options, &config.output_dir, ReportOutputFormat::Json)
            .expect("export should succeed");

    // 6 pages x 2 locales, plus trip-a in both locales and th-only in Thai
    assert_eq!(manifest.pages.len(), 12 + 3);
    assert_eq!(manifest.skipped.len(), 1);
    assert_eq!(manifest.skipped[0].path, "/en/blog/th-only");
    assert_eq!(manifest.catalogs.len(), 2);
    assert_eq!(manifest.catalogs[0].sha256.len(), 64);

    let post = config.output_dir.join("en/blog/trip-a/index.json");
    let body: serde_json::Value = serde_json::from_str(&fs::read_to_string(post).unwrap()).unwrap();
    assert_eq!(body["page"]["kind"], "blog-post");
    assert_eq!(body["page"]["data"]["meta_title"], "Japan | Blog");
    assert!(config.output_dir.join("th/index.json").is_file());
    assert!(config.output_dir.join(MANIFEST_FILE).is_file());

    let reread = storage::read_manifest(&config.output_dir).unwrap();
    assert_eq!(reread, manifest);
}

#[test]
fn test_export_yaml_extension() {
    let dir = TempDir::new().unwrap();
    write_site(dir.path());
    let config = SiteConfig::load(&dir.path().join("site.yaml")).unwrap();
    let store = CatalogStore::load_all(config.registry().unwrap(), &config.messages_dir).unwrap();
    let out = dir.path().join("yaml-out");

    storage::export_site(
        &store,
        &RenderOptions::new(config.posts_section.clone()),
        &out,
        ReportOutputFormat::Yaml,
    )
    .unwrap();

    let about = fs::read_to_string(out.join("th/about/index.yaml")).unwrap();
    assert!(about.contains("kind: about"));
}
