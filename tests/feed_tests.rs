use std::io::Write;

use sourcedex::feed::{FeedOutcome, load_feed, parse_feed};

#[tokio::test]
async fn load_feed_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{"sources":[
            {{"name":"Paper","downloadURL":"https://p.example/p.zip","languages":["en"],"version":"1.2"}},
            {{"name":"Scroll","downloadURL":"https://s.example/s.zip","languages":["multi","ja"],"contentRating":1}}
        ]}}"#
    )
    .expect("write feed");

    let path = file.path().to_string_lossy().to_string();
    match load_feed(&path).await.expect("loads") {
        FeedOutcome::Loaded(records) => {
            assert_eq!(records.len(), 2);
            assert_eq!(records[0].name, "Paper");
            assert_eq!(records[0].version.to_string(), "1.2");
            assert_eq!(records[1].languages, vec!["multi", "ja"]);
            assert_eq!(records[1].content_rating, Some(1));
        }
        FeedOutcome::Empty => panic!("expected records"),
    }
}

#[tokio::test]
async fn load_feed_missing_file_errors() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir
        .path()
        .join("does-not-exist.json")
        .to_string_lossy()
        .to_string();
    assert!(load_feed(&path).await.is_err());
}

#[tokio::test]
async fn load_feed_empty_sources_is_soft() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{"sources":[]}}"#).expect("write feed");
    let path = file.path().to_string_lossy().to_string();
    assert!(matches!(
        load_feed(&path).await.expect("soft empty"),
        FeedOutcome::Empty
    ));
}

#[test]
fn parse_feed_shape_checks() {
    assert!(matches!(
        parse_feed("{}").expect("missing sources"),
        FeedOutcome::Empty
    ));
    assert!(matches!(
        parse_feed(r#"{"sources":42}"#).expect("non-array sources"),
        FeedOutcome::Empty
    ));
    assert!(parse_feed("not json").is_err());
}
