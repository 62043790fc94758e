use aws_sdk_s3::error::SdkError;
use clap::Parser;
use mockall::predicate as testing;
use s3_json_store::app::{dispatch, resolve_config};
use s3_json_store::args::{Args, Command};
use s3_json_store::interfaces::MockObjectStore;
use s3_json_store::testing::MemoryStore;
use s3_json_store::{AppError, ObjectStore, StorageError};
use std::io::Write;
use tempfile::NamedTempFile;

fn upload_command(key: &str, body: &str) -> Command {
    Command::Upload {
        key: key.to_string(),
        body: Some(body.to_string()),
        file: None,
        skip_existing: false,
        no_validate: false,
    }
}

fn url_for(mock: &mut MockObjectStore) {
    mock.expect_object_url()
        .returning(|key| format!("s3://reports/{key}"));
}

#[tokio::test]
async fn exists_prints_plain_and_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = MockObjectStore::new();
    store
        .expect_exists()
        .with(testing::eq("reports/2024.json"))
        .times(2)
        .returning(|_| Ok(false));

    let command = Command::Exists {
        key: "reports/2024.json".to_string(),
    };

    let mut out = Vec::new();
    dispatch(&command, false, &store, &mut out).await?;
    assert_eq!(String::from_utf8(out)?, "false\n");

    let mut out = Vec::new();
    dispatch(&command, true, &store, &mut out).await?;
    assert_eq!(
        String::from_utf8(out)?,
        "{\"key\":\"reports/2024.json\",\"exists\":false}\n"
    );
    Ok(())
}

#[tokio::test]
async fn exists_propagates_provider_errors() {
    let mut store = MockObjectStore::new();
    store.expect_exists().times(1).returning(|key| {
        Err(StorageError::HeadObject {
            bucket: "reports".to_string(),
            key: key.to_string(),
            source: SdkError::timeout_error("request timed out"),
        })
    });

    let command = Command::Exists {
        key: "a.json".to_string(),
    };
    let mut out = Vec::new();
    let err = dispatch(&command, false, &store, &mut out).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::Storage(StorageError::HeadObject { .. })
    ));
    assert!(out.is_empty());
}

#[tokio::test]
async fn upload_rejects_invalid_json_before_sending() {
    let mut store = MockObjectStore::new();
    store.expect_upload().never();
    store.expect_exists().never();

    let mut out = Vec::new();
    let err = dispatch(&upload_command("a.json", "{not json"), false, &store, &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidBody(_)));
}

#[tokio::test]
async fn upload_without_validation_sends_any_text() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = MockObjectStore::new();
    store
        .expect_upload()
        .withf(|key, body| key == "notes.txt" && body == "plain text")
        .times(1)
        .returning(|_, _| Ok(()));
    url_for(&mut store);

    let command = Command::Upload {
        key: "notes.txt".to_string(),
        body: Some("plain text".to_string()),
        file: None,
        skip_existing: false,
        no_validate: true,
    };
    let mut out = Vec::new();
    dispatch(&command, false, &store, &mut out).await?;

    assert_eq!(String::from_utf8(out)?, "uploaded: s3://reports/notes.txt\n");
    Ok(())
}

#[tokio::test]
async fn skip_existing_does_not_upload_present_object() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = MockObjectStore::new();
    store
        .expect_exists()
        .with(testing::eq("a.json"))
        .times(1)
        .returning(|_| Ok(true));
    store.expect_upload().never();
    url_for(&mut store);

    let command = Command::Upload {
        key: "a.json".to_string(),
        body: Some("{}".to_string()),
        file: None,
        skip_existing: true,
        no_validate: false,
    };
    let mut out = Vec::new();
    dispatch(&command, false, &store, &mut out).await?;

    assert_eq!(String::from_utf8(out)?, "skipped: s3://reports/a.json\n");
    Ok(())
}

#[tokio::test]
async fn upload_error_propagates() {
    let mut store = MockObjectStore::new();
    store.expect_upload().times(1).returning(|key, _| {
        Err(StorageError::PutObject {
            bucket: "reports".to_string(),
            key: key.to_string(),
            source: SdkError::timeout_error("request timed out"),
        })
    });

    let mut out = Vec::new();
    let err = dispatch(&upload_command("a.json", "{}"), false, &store, &mut out)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Storage(StorageError::PutObject { .. })
    ));
}

#[tokio::test]
async fn upload_from_file_then_exists() -> Result<(), Box<dyn std::error::Error>> {
    let mut body_file = NamedTempFile::new()?;
    write!(body_file, "{{\"ok\":true}}")?;

    let store = MemoryStore::new("reports");
    let command = Command::Upload {
        key: "reports/2024.json".to_string(),
        body: None,
        file: Some(body_file.path().to_path_buf()),
        skip_existing: false,
        no_validate: false,
    };

    let mut out = Vec::new();
    dispatch(&command, false, &store, &mut out).await?;
    assert_eq!(store.get("reports/2024.json").as_deref(), Some("{\"ok\":true}"));

    let mut out = Vec::new();
    let exists = Command::Exists {
        key: "reports/2024.json".to_string(),
    };
    dispatch(&exists, false, &store, &mut out).await?;
    assert_eq!(String::from_utf8(out)?, "true\n");
    Ok(())
}

#[tokio::test]
async fn head_prints_metadata_and_fails_when_missing() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStore::new("reports");
    store.upload("a.json", "{}".to_string()).await?;

    let mut out = Vec::new();
    dispatch(
        &Command::Head {
            key: "a.json".to_string(),
        },
        false,
        &store,
        &mut out,
    )
    .await?;
    let head: serde_json::Value = serde_json::from_slice(&out)?;
    assert_eq!(head["content_type"], "application/json");
    assert_eq!(head["content_length"], 2);

    let mut out = Vec::new();
    let err = dispatch(
        &Command::Head {
            key: "missing.json".to_string(),
        },
        false,
        &store,
        &mut out,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Storage(ref e) if e.is_not_found()));
    Ok(())
}

#[test]
fn resolve_config_uses_command_line_and_credential_files() -> Result<(), Box<dyn std::error::Error>>
{
    let mut key_id = NamedTempFile::new()?;
    writeln!(key_id, "AKIAEXAMPLE")?;
    let mut secret = NamedTempFile::new()?;
    writeln!(secret, "  very-secret  ")?;

    let args = Args::parse_from([
        "s3-json-store",
        "exists",
        "a.json",
        "--region",
        "eu-west-1",
        "--bucket",
        "reports",
        "--access-key-id-filepath",
        key_id.path().to_str().unwrap(),
        "--secret-key-filepath",
        secret.path().to_str().unwrap(),
    ]);
    args.validate()?;

    let config = resolve_config(&args)?;
    assert_eq!(config.region, "eu-west-1");
    assert_eq!(config.bucket_name, "reports");

    let creds = config.credentials.expect("credentials loaded from files");
    assert_eq!(creds.access_key_id, "AKIAEXAMPLE");
    assert_eq!(creds.secret_access_key, "very-secret");
    Ok(())
}

#[test]
fn credential_files_must_come_in_pairs() -> Result<(), Box<dyn std::error::Error>> {
    let key_id = NamedTempFile::new()?;
    let args = Args::parse_from([
        "s3-json-store",
        "exists",
        "a.json",
        "--access-key-id-filepath",
        key_id.path().to_str().unwrap(),
    ]);
    assert!(args.validate().is_err());
    Ok(())
}
