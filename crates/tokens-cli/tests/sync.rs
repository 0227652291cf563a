//! End-to-end tests for the sync pipeline over a scripted transport.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use tempfile::TempDir;
use tokens_cli::{SyncConfig, SyncError, run_sync};
use tokens_figma::{FigmaClient, HttpRequest, HttpResponse, Result, StatusCode, Transport};

#[derive(Default)]
struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    fn new(responses: Vec<Result<HttpResponse>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|request| request.url.to_string())
            .collect()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left")
    }
}

const THEME: &str = r#"{
    "status": 200,
    "error": false,
    "meta": {
        "variableCollections": {
            "VariableCollectionId:1:0": {
                "id": "VariableCollectionId:1:0",
                "name": "Theme",
                "modes": [
                    {"modeId": "1:0", "name": "Light"},
                    {"modeId": "1:1", "name": "Dark"}
                ],
                "defaultModeId": "1:0"
            }
        },
        "variables": {
            "VariableID:1:1": {
                "id": "VariableID:1:1",
                "name": "color/bg",
                "variableCollectionId": "VariableCollectionId:1:0",
                "resolvedType": "COLOR",
                "valuesByMode": {
                    "1:0": {"r": 1, "g": 1, "b": 1},
                    "1:1": {"r": 0, "g": 0, "b": 0}
                }
            }
        }
    }
}"#;

const ONLY_REMOTE: &str = r#"{
    "meta": {
        "variableCollections": {},
        "variables": {
            "VariableID:9:9": {
                "id": "VariableID:9:9",
                "name": "color/shared",
                "variableCollectionId": "VariableCollectionId:9:0",
                "resolvedType": "COLOR",
                "remote": true,
                "valuesByMode": {"9:0": {"r": 0, "g": 0, "b": 0}}
            }
        }
    }
}"#;

fn ok(body: &str) -> Result<HttpResponse> {
    Ok(HttpResponse::new(StatusCode::OK, body))
}

fn client(responses: Vec<Result<HttpResponse>>) -> FigmaClient<ScriptedTransport> {
    FigmaClient::with_transport(ScriptedTransport::new(responses), "figd_secret").unwrap()
}

fn config(out: &Path, keys: &[&str], dry_run: bool) -> SyncConfig {
    let keys: Vec<String> = keys.iter().map(|key| key.to_string()).collect();
    SyncConfig::resolve(
        Some("figd_secret".to_string()),
        &keys,
        out.to_path_buf(),
        "https://api.figma.com".to_string(),
        dry_run,
    )
    .unwrap()
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn sync_error(err: &anyhow::Error) -> Option<&SyncError> {
    err.chain().find_map(|cause| cause.downcast_ref::<SyncError>())
}

#[tokio::test]
async fn single_source_writes_files_into_output_dir() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("tokens_new");
    let client = client(vec![ok(THEME)]);

    let reports = run_sync(&client, &config(&out, &["KEY1"], false))
        .await
        .unwrap();

    assert_eq!(reports.len(), 1);
    let names: Vec<_> = reports[0].files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Theme.Dark.json", "Theme.Light.json"]);
    assert_eq!(reports[0].token_count(), 2);

    let light = read_json(&out.join("Theme.Light.json"));
    assert_eq!(light["color"]["bg"]["$value"], "#ffffff");
    let dark = read_json(&out.join("Theme.Dark.json"));
    assert_eq!(dark["color"]["bg"]["$value"], "#000000");
    assert_eq!(
        client.transport().urls(),
        ["https://api.figma.com/v1/files/KEY1/variables/local"]
    );
}

#[tokio::test]
async fn several_sources_are_written_side_by_side() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("tokens_new");
    let client = client(vec![ok(THEME), ok(THEME)]);

    let reports = run_sync(&client, &config(&out, &["KEY1", "KEY2"], false))
        .await
        .unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].file_key, "KEY1");
    assert_eq!(reports[1].file_key, "KEY2");
    assert!(out.join("KEY1").join("Theme.Light.json").exists());
    assert!(out.join("KEY2").join("Theme.Light.json").exists());
    assert!(!out.join("Theme.Light.json").exists());
    assert_eq!(
        client.transport().urls(),
        [
            "https://api.figma.com/v1/files/KEY1/variables/local",
            "https://api.figma.com/v1/files/KEY2/variables/local",
        ]
    );
}

#[tokio::test]
async fn empty_response_is_an_empty_dataset() {
    let dir = TempDir::new().unwrap();
    let client = client(vec![ok("")]);

    let err = run_sync(&client, &config(dir.path(), &["KEY1"], false))
        .await
        .unwrap_err();

    assert!(matches!(
        sync_error(&err),
        Some(SyncError::EmptyDataset { file_key }) if file_key == "KEY1"
    ));
}

#[tokio::test]
async fn only_remote_variables_yield_no_token_files() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("tokens_new");
    let client = client(vec![ok(ONLY_REMOTE)]);

    let err = run_sync(&client, &config(&out, &["KEY1"], false))
        .await
        .unwrap_err();

    assert!(matches!(
        sync_error(&err),
        Some(SyncError::NoTokenFiles { .. })
    ));
    assert!(!out.exists());
}

#[tokio::test]
async fn failing_source_keeps_earlier_outputs() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("tokens_new");
    let client = client(vec![
        ok(THEME),
        Ok(HttpResponse::new(StatusCode::FORBIDDEN, "Invalid token")),
        ok(THEME),
    ]);

    let err = run_sync(&client, &config(&out, &["KEY1", "KEY2", "KEY3"], false))
        .await
        .unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("sync failed for file KEY2"), "{message}");
    assert!(message.contains("403"), "{message}");
    assert!(out.join("KEY1").join("Theme.Light.json").exists());
    assert!(!out.join("KEY2").exists());
    assert!(!out.join("KEY3").exists());
    assert_eq!(client.transport().urls().len(), 2);
}

#[tokio::test]
async fn dry_run_reports_without_writing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("tokens_new");
    let client = client(vec![ok(THEME)]);

    let reports = run_sync(&client, &config(&out, &["KEY1"], true))
        .await
        .unwrap();

    assert_eq!(reports[0].files.len(), 2);
    assert!(reports[0].files.iter().all(|file| !file.written));
    assert!(!out.exists());
}
