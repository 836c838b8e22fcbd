//! Integration tests for hoist-core.
//!
//! Drives `ManifestService` through hand-written port implementations: an
//! in-test filesystem and a JSON codec standing in for the generic document
//! decoder.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use hoist_core::prelude::*;
use serde_json::json;

#[derive(Clone, Default)]
struct StubFs {
    files: Arc<RwLock<HashMap<PathBuf, Vec<u8>>>>,
}

impl StubFs {
    fn with_file(self, path: &str, content: serde_json::Value) -> Self {
        self.files
            .write()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string().into_bytes());
        self
    }

    fn with_raw(self, path: &str, content: &str) -> Self {
        self.files
            .write()
            .unwrap()
            .insert(PathBuf::from(path), content.as_bytes().to_vec());
        self
    }
}

impl Filesystem for StubFs {
    fn read_file(&self, path: &Path) -> HoistResult<Vec<u8>> {
        self.files.read().unwrap().get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "file does not exist".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> HoistResult<()> {
        self.files
            .write()
            .unwrap()
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }

    fn create_dir_all(&self, _path: &Path) -> HoistResult<()> {
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.read().unwrap().contains_key(path)
    }
}

struct JsonCodec;

impl ManifestCodec for JsonCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Template, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::new(e.to_string()))
    }

    fn encode(&self, template: &Template) -> Result<String, CodecError> {
        serde_json::to_string_pretty(template).map_err(|e| CodecError::new(e.to_string()))
    }
}

fn service(fs: StubFs) -> ManifestService {
    ManifestService::new(Box::new(fs), Box::new(JsonCodec))
}

#[test]
fn test_valid_manifest() {
    let fs = StubFs::default().with_file(
        "my/stack/hoist.yml",
        json!({
            "version": "0.1.0",
            "stack": { "name": "my-stack" },
            "services": { "my-service": { "type": "go", "path": "my/path" } }
        }),
    );

    let tmpl = service(fs).load("my/stack").unwrap();

    let expected = Template::new(
        "0.1.0",
        Stack::new("my-stack"),
        Services::new().with_service(
            "my-service",
            Service {
                name: "my-service".into(),
                kind: "go".into(),
                path: "my/path".into(),
            },
        ),
    );
    assert_eq!(tmpl, expected);
}

#[test]
fn test_missing_file() {
    let err = service(StubFs::default()).load("my/stack").unwrap_err();
    assert!(err.is(ErrorKind::FileUnreadable));
    assert!(err.to_string().contains("my/stack/hoist.yml"));
}

#[test]
fn test_undecodable_document() {
    let fs = StubFs::default().with_raw("my/invalid-stack/hoist.yml", "!!!THIS ISN'T JSON!!!");
    let err = service(fs).load("my/invalid-stack").unwrap_err();
    assert!(err.is(ErrorKind::DocumentUndecodable));
    assert_eq!(err.category(), ErrorCategory::Validation);
}

#[test]
fn test_missing_version_reports_nothing_else() {
    let fs = StubFs::default().with_file(
        "s/hoist.yml",
        json!({
            "stack": { "name": "-bad" },
            "services": { "x": {} }
        }),
    );
    let err = service(fs).load("s").unwrap_err();
    assert_eq!(err, HoistError::Manifest(ManifestError::VersionRequired));
    assert_eq!(err.leaves().len(), 1);
}

#[test]
fn test_invalid_stack_name() {
    let fs = StubFs::default().with_file(
        "s/hoist.yml",
        json!({
            "version": "0.1.0",
            "stack": { "name": "-my-stack" },
            "services": { "my-service": { "type": "go", "path": "my/path" } }
        }),
    );
    let err = service(fs).load("s").unwrap_err();
    assert!(err.is(ErrorKind::StackNameInvalid));
    assert_eq!(err.context()["name"], "-my-stack");
}

#[test]
fn test_two_invalid_services_aggregate() {
    let fs = StubFs::default().with_file(
        "s/hoist.yml",
        json!({
            "version": "0.1.0",
            "stack": { "name": "my-stack" },
            "services": {
                "no-type": { "path": "a" },
                "no-path": { "type": "go" }
            }
        }),
    );
    let err = service(fs).load("s").unwrap_err();

    assert!(err.is(ErrorKind::ServicesInvalid));
    let mut kinds: Vec<_> = err.leaves().iter().map(HoistError::kind).collect();
    kinds.sort();
    assert_eq!(
        kinds,
        vec![ErrorKind::ServiceMissingType, ErrorKind::ServiceMissingPath]
    );
}

#[test]
fn test_round_trip_through_canonical_form() {
    let fs = StubFs::default().with_file(
        "s/hoist.yml",
        json!({
            "version": "0.1.0",
            "stack": { "name": "my-stack" },
            "services": {
                "api": { "type": "go", "path": "api" },
                "web": { "type": "node", "path": "." }
            }
        }),
    );
    let svc = service(fs.clone());
    let original = svc.load("s").unwrap();

    let text = svc.render(&original);
    assert!(!text.contains("\"name\": \"api\""));

    let fs = fs.with_raw("copy/hoist.yml", &text);
    let reloaded = service(fs).load("copy").unwrap();
    assert_eq!(reloaded, original);
}

#[test]
fn test_init_then_load() {
    let fs = StubFs::default();
    let svc = service(fs.clone());

    let tmpl = Template::new(
        SUPPORTED_VERSION,
        Stack::new("fresh"),
        Services::new().with_service("app", Service::new("go", ".")),
    );
    let outcome = svc.init("fresh", tmpl, false).unwrap();
    assert_eq!(outcome.path, PathBuf::from("fresh/hoist.yml"));
    assert!(!outcome.replaced);

    let loaded = svc.load("fresh").unwrap();
    assert_eq!(loaded.stack.name, "fresh");
    assert_eq!(loaded.services.get("app").unwrap().name, "app");

    let again = Template::new(SUPPORTED_VERSION, Stack::new("fresh"), Services::new());
    let err = svc.init("fresh", again.clone(), false).unwrap_err();
    assert!(err.is(ErrorKind::ManifestExists));

    assert!(svc.init("fresh", again, true).unwrap().replaced);
}

#[test]
fn test_check_report() {
    let fs = StubFs::default().with_file(
        "s/hoist.yml",
        json!({ "version": "0.1.0", "stack": { "name": "s" } }),
    );
    let report = service(fs).check("s");
    assert!(report.valid);
    assert!(report.issues.is_empty());
    assert_eq!(report.path, PathBuf::from("s/hoist.yml"));
}
