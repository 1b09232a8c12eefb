use storage::{JsonFileRepository, ProgressRecord, ProgressRepository, StorageError};

#[tokio::test]
async fn empty_directory_loads_as_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = JsonFileRepository::new(dir.path());
    assert!(repo.load().await.expect("load").is_none());
}

#[tokio::test]
async fn json_file_roundtrip_persists_whole_blob() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = JsonFileRepository::new(dir.path());

    let record = ProgressRecord {
        read: vec![true, false],
        notes: vec![String::new(), "hello".to_string()],
    };
    repo.save(&record).await.expect("save");

    // A second repository over the same directory sees the same blob, the
    // equivalent of a page reload.
    let reopened = JsonFileRepository::new(dir.path());
    let fetched = reopened.load().await.expect("load").expect("record");
    assert_eq!(fetched, record);
}

#[tokio::test]
async fn save_overwrites_prior_content() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = JsonFileRepository::new(dir.path());

    let first = ProgressRecord {
        read: vec![true],
        notes: vec!["old".to_string()],
    };
    let second = ProgressRecord {
        read: vec![false],
        notes: vec!["new".to_string()],
    };
    repo.save(&first).await.expect("save first");
    repo.save(&second).await.expect("save second");

    let fetched = repo.load().await.expect("load").expect("record");
    assert_eq!(fetched, second);
}

#[tokio::test]
async fn corrupt_blob_surfaces_serialization_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = JsonFileRepository::new(dir.path());
    std::fs::write(repo.path(), "{not json").expect("write garbage");

    let err = repo.load().await.expect_err("corrupt blob should fail");
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[tokio::test]
async fn missing_directory_fails_save() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope");
    let repo = JsonFileRepository::new(&missing);

    let record = ProgressRecord {
        read: vec![],
        notes: vec![],
    };
    let err = repo.save(&record).await.expect_err("save should fail");
    assert!(matches!(err, StorageError::Io(_)));
}
