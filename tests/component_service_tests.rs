//! Integration Tests for the Component Lookup Service
//!
//! Drives `ComponentService` against real fixture directories, counting
//! filesystem and parser calls to observe caching.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use mdc_server::cache::ManualClock;
use mdc_server::docs::{ComponentMeta, DocumentSource, FsDocumentSource};
use mdc_server::{ComponentService, ParseError, ServiceError};
use tempfile::TempDir;

const TTL: Duration = Duration::from_secs(300);

// == Helper Types ==

/// Call counters shared between a test and its `CountingSource`.
#[derive(Debug, Default)]
struct Calls {
    list: AtomicUsize,
    meta: AtomicUsize,
    content: AtomicUsize,
}

impl Calls {
    fn list_calls(&self) -> usize {
        self.list.load(Ordering::SeqCst)
    }

    fn meta_calls(&self) -> usize {
        self.meta.load(Ordering::SeqCst)
    }

    fn content_calls(&self) -> usize {
        self.content.load(Ordering::SeqCst)
    }
}

/// Filesystem source that counts every call it forwards.
#[derive(Debug)]
struct CountingSource {
    inner: FsDocumentSource,
    calls: Arc<Calls>,
}

impl DocumentSource for CountingSource {
    async fn list_dir(&self, dir: &Path) -> std::io::Result<Vec<String>> {
        self.calls.list.fetch_add(1, Ordering::SeqCst);
        self.inner.list_dir(dir).await
    }

    async fn parse_meta(&self, path: &Path) -> Result<ComponentMeta, ParseError> {
        self.calls.meta.fetch_add(1, Ordering::SeqCst);
        self.inner.parse_meta(path).await
    }

    async fn parse_content(&self, path: &Path) -> Result<String, ParseError> {
        self.calls.content.fetch_add(1, Ordering::SeqCst);
        self.inner.parse_content(path).await
    }
}

struct Fixture {
    dir: TempDir,
    clock: Arc<ManualClock>,
    calls: Arc<Calls>,
    service: ComponentService<CountingSource>,
}

// == Helper Functions ==

fn write_doc(dir: &Path, file: &str, name: &str, description: &str) {
    let text = format!(
        "---\nname: {name}\ndescription: {description}\n---\n\n# {name}\n\nUsage of {name}.\n"
    );
    std::fs::write(dir.join(file), text).unwrap();
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let clock = Arc::new(ManualClock::new());
    let calls = Arc::new(Calls::default());
    let counting = CountingSource {
        inner: FsDocumentSource,
        calls: calls.clone(),
    };
    let service = ComponentService::with_source(dir.path(), counting, TTL, clock.clone());
    Fixture {
        dir,
        clock,
        calls,
        service,
    }
}

// == Listing ==

#[tokio::test]
async fn test_listing_skips_malformed_documents() {
    let f = fixture();
    write_doc(f.dir.path(), "Button.mdx", "Button", "Clickable button");
    write_doc(f.dir.path(), "Input.mdx", "Input", "Text entry");
    write_doc(f.dir.path(), "Select.mdx", "Select", "Pick one option");
    std::fs::write(
        f.dir.path().join("Broken.mdx"),
        "---\nname: Broken\n---\n\n# Broken\n",
    )
    .unwrap();

    let list = f.service.get_components_list().await.unwrap();

    let names: Vec<&str> = list.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Button", "Input", "Select"]);
    assert_eq!(f.calls.meta_calls(), 4);
}

#[tokio::test]
async fn test_listing_only_parses_doc_extension() {
    let f = fixture();
    write_doc(f.dir.path(), "Button.mdx", "Button", "Clickable button");
    write_doc(f.dir.path(), "Guide.md", "Guide", "Not a unit");
    std::fs::write(f.dir.path().join("logo.png"), [0u8, 1, 2]).unwrap();

    let list = f.service.get_components_list().await.unwrap();

    assert_eq!(list.len(), 1);
    assert_eq!(f.calls.meta_calls(), 1);
}

#[tokio::test]
async fn test_listing_carries_props() {
    let f = fixture();
    std::fs::write(
        f.dir.path().join("Button.mdx"),
        "---\nname: Button\ndescription: Clickable\nprops:\n  size: Button size\n---\n",
    )
    .unwrap();

    let list = f.service.get_components_list().await.unwrap();

    let props = list[0].props.as_ref().unwrap();
    assert_eq!(props["size"], "Button size");
}

#[tokio::test]
async fn test_empty_directory_lists_nothing() {
    let f = fixture();
    let list = f.service.get_components_list().await.unwrap();
    assert!(list.is_empty());
}

#[tokio::test]
async fn test_missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let service = ComponentService::new(&missing);

    let list_err = service.get_components_list().await.unwrap_err();
    match list_err {
        ServiceError::DirectoryAccess { path, .. } => assert_eq!(path, missing),
        other => panic!("expected DirectoryAccess, got {other:?}"),
    }

    let detail_err = service.get_component_detail("Button").await.unwrap_err();
    assert!(matches!(detail_err, ServiceError::DirectoryAccess { .. }));
}

// == Caching ==

#[tokio::test]
async fn test_list_cached_within_ttl() {
    let f = fixture();
    write_doc(f.dir.path(), "Button.mdx", "Button", "Clickable button");
    write_doc(f.dir.path(), "Input.mdx", "Input", "Text entry");

    let first = f.service.get_components_list().await.unwrap();
    f.clock.advance(TTL);
    let second = f.service.get_components_list().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(f.calls.list_calls(), 1);
    assert_eq!(f.calls.meta_calls(), 2);
}

#[tokio::test]
async fn test_list_rescanned_after_ttl() {
    let f = fixture();
    write_doc(f.dir.path(), "Button.mdx", "Button", "Clickable button");

    assert_eq!(f.service.get_components_list().await.unwrap().len(), 1);

    // New files stay invisible until the cached listing expires
    write_doc(f.dir.path(), "Input.mdx", "Input", "Text entry");
    f.clock.advance_ms(1000);
    assert_eq!(f.service.get_components_list().await.unwrap().len(), 1);
    assert_eq!(f.calls.list_calls(), 1);

    f.clock.advance(TTL);
    assert_eq!(f.service.get_components_list().await.unwrap().len(), 2);
    assert_eq!(f.calls.list_calls(), 2);
}

#[tokio::test]
async fn test_detail_cached_within_ttl() {
    let f = fixture();
    write_doc(f.dir.path(), "Button.mdx", "Button", "Clickable button");

    let first = f.service.get_component_detail("Button").await.unwrap();
    let second = f.service.get_component_detail("Button").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(f.calls.list_calls(), 1);
    assert_eq!(f.calls.content_calls(), 1);

    f.clock.advance(TTL + Duration::from_millis(1));
    f.service.get_component_detail("Button").await.unwrap();
    assert_eq!(f.calls.list_calls(), 2);
    assert_eq!(f.calls.content_calls(), 2);
}

#[tokio::test]
async fn test_list_and_detail_caches_are_independent() {
    let f = fixture();
    write_doc(f.dir.path(), "Button.mdx", "Button", "Clickable button");

    f.service.get_components_list().await.unwrap();
    f.service.get_component_detail("Button").await.unwrap();

    // Each flow performs its own scan
    assert_eq!(f.calls.list_calls(), 2);

    let stats = f.service.cache_stats().await;
    assert_eq!(stats.metadata.total_entries, 1);
    assert_eq!(stats.content.total_entries, 1);
}

#[tokio::test]
async fn test_services_on_different_directories_do_not_collide() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    write_doc(a.path(), "Button.mdx", "Button", "From a");
    write_doc(b.path(), "Button.mdx", "Button", "From b");

    let service_a = ComponentService::new(a.path());
    let service_b = ComponentService::new(b.path());

    assert_eq!(
        service_a.get_components_list().await.unwrap()[0].description,
        "From a"
    );
    assert_eq!(
        service_b.get_components_list().await.unwrap()[0].description,
        "From b"
    );
}

// == Detail Lookup ==

#[tokio::test]
async fn test_detail_lookup_is_case_insensitive() {
    let f = fixture();
    write_doc(f.dir.path(), "Button.mdx", "Button", "Clickable button");

    let lower = f.service.get_component_detail("button").await.unwrap();
    let upper = f.service.get_component_detail("BUTTON").await.unwrap();
    let exact = f.service.get_component_detail("Button").await.unwrap();

    assert_eq!(lower, upper);
    assert_eq!(lower, exact);
    assert!(exact.starts_with("---\nname: Button"));
}

#[tokio::test]
async fn test_not_found_is_never_cached() {
    let f = fixture();
    write_doc(f.dir.path(), "Button.mdx", "Button", "Clickable button");

    let err = f.service.get_component_detail("missing").await.unwrap_err();
    match err {
        ServiceError::ComponentNotFound(name) => assert_eq!(name, "missing"),
        other => panic!("expected ComponentNotFound, got {other:?}"),
    }

    write_doc(f.dir.path(), "Missing.mdx", "Missing", "Added later");
    let content = f.service.get_component_detail("missing").await.unwrap();

    assert!(content.contains("Added later"));
    assert_eq!(f.clock.elapsed_ms(), 0);
}

#[tokio::test]
async fn test_detail_returns_documents_with_invalid_metadata() {
    let f = fixture();
    std::fs::write(
        f.dir.path().join("Broken.mdx"),
        "---\nname: Broken\n---\n\n# Broken\n",
    )
    .unwrap();

    assert!(f.service.get_components_list().await.unwrap().is_empty());

    let content = f.service.get_component_detail("broken").await.unwrap();
    assert!(content.contains("# Broken"));
}

#[tokio::test]
async fn test_concurrent_misses_both_succeed() {
    let f = fixture();
    write_doc(f.dir.path(), "Button.mdx", "Button", "Clickable button");
    let service = Arc::new(f.service);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.get_components_list().await })
        })
        .collect();

    for handle in handles {
        let list = handle.await.unwrap().unwrap();
        assert_eq!(list.len(), 1);
    }

    // No stampede suppression: anywhere from one to four scans is fine
    let scans = f.calls.list_calls();
    assert!((1..=4).contains(&scans));
}
