use std::io::Write;

use pathshala::application::ports::{CorpusSource, CorpusSourceError};
use pathshala::infrastructure::corpus::FileCorpusSource;

#[tokio::test]
async fn given_existing_file_when_loading_then_returns_its_text() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all("संधि\n\nsandhi".as_bytes()).unwrap();
    let source = FileCorpusSource::new(file.path());

    let corpus = source.load().await.unwrap();

    assert_eq!(corpus.text(), "संधि\n\nsandhi");
    assert!(!corpus.is_blank());
}

#[tokio::test]
async fn given_missing_file_when_loading_then_returns_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileCorpusSource::new(dir.path().join("source.txt"));

    let result = source.load().await;

    assert!(matches!(result, Err(CorpusSourceError::NotFound(_))));
}

#[tokio::test]
async fn given_missing_file_when_loading_then_error_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-corpus.txt");
    let source = FileCorpusSource::new(&path);

    let error = source.load().await.unwrap_err();

    match error {
        CorpusSourceError::NotFound(label) => {
            assert_eq!(label, path.display().to_string());
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn given_directory_path_when_loading_then_returns_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileCorpusSource::new(dir.path());

    let result = source.load().await;

    assert!(matches!(result, Err(CorpusSourceError::Unreadable(_))));
}

#[tokio::test]
async fn given_invalid_utf8_when_loading_then_returns_unreadable() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe, 0x00]).unwrap();
    let source = FileCorpusSource::new(file.path());

    let result = source.load().await;

    assert!(matches!(result, Err(CorpusSourceError::Unreadable(_))));
}
