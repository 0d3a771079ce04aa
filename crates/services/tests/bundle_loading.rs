use services::{
    BundleDirectory, CardSession, DEFAULT_DECK_RESOURCE, DeckLoadError, DeckLoader, LoadStatus,
    RecordingSpeech,
};

const DECK: &str = r#"[
    {"statement": "Buongiorno", "statement_emojis": ["🌅"], "question": "Come si saluta al mattino?", "question_emojis": ["🤔"]},
    {"statement": "Buonanotte", "statement_emojis": ["🌙", "😴"], "question": "Come si saluta la sera?", "question_emojis": []}
]"#;

#[test]
fn bundle_deck_drives_a_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join(DEFAULT_DECK_RESOURCE), DECK).expect("write deck");

    let bundle = BundleDirectory::new(dir.path());
    let load = DeckLoader::load_resource(&bundle, DEFAULT_DECK_RESOURCE);
    assert!(matches!(load.status, LoadStatus::Loaded));

    let mut session = CardSession::new(load.into_deck());
    let speech = RecordingSpeech::new();

    session.flip();
    session.read_visible(&speech).unwrap();
    assert!(session.next());
    session.read_visible(&speech).unwrap();

    let face = session.view().expect("card visible");
    assert_eq!(face.emoji_line(), "🌙 😴");
    assert_eq!(face.counter(), "2 / 2");
    assert!(!face.can_go_next);

    let texts: Vec<_> = speech.spoken().into_iter().map(|u| u.text).collect();
    assert_eq!(texts, ["Come si saluta al mattino?", "Buonanotte"]);
}

#[test]
fn missing_bundle_file_is_reported_but_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bundle = BundleDirectory::new(dir.path());

    let load = DeckLoader::load_resource(&bundle, DEFAULT_DECK_RESOURCE);
    assert!(matches!(load.status, LoadStatus::Missing));
    assert!(load.is_failure());

    let session = CardSession::new(load.into_deck());
    assert!(session.is_empty());
}

#[test]
fn truncated_bundle_file_fails_to_decode() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join(DEFAULT_DECK_RESOURCE), &DECK[..40]).expect("write deck");

    let load = DeckLoader::load_resource(&BundleDirectory::new(dir.path()), DEFAULT_DECK_RESOURCE);
    assert!(matches!(load.status, LoadStatus::Failed(DeckLoadError::Decode(_))));
    assert!(load.deck.is_empty());
}
