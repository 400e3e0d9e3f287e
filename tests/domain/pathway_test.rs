use bytes::Bytes;

use pathshala::domain::{
    COMMAND_STYLE, DEFAULT_DRAWING_FILE_NAME, DrawingUpload, NARRATION_STYLE, Pathway,
    SanskritSpeech,
};

#[test]
fn given_known_zone_when_looking_up_fallback_then_numbers_levels_from_one() {
    let pathway = Pathway::fallback("gradation").unwrap();

    assert_eq!(pathway.zone_id, "gradation");
    assert_eq!(pathway.label, "Guṇa / Vṛddhi");
    assert_eq!(pathway.levels.len(), 5);
    assert_eq!(pathway.levels[0].level, 1);
    assert_eq!(pathway.levels[4].level, 5);
    assert!(pathway.levels[3].objectives[0].contains("√budh"));
}

#[test]
fn given_every_curriculum_zone_when_looking_up_fallback_then_has_objectives() {
    let zones = [
        "compression",
        "phonetics",
        "gradation",
        "sandhi",
        "roots",
        "words",
        "suffixes",
        "karakas",
        "verbs",
        "compounds",
        "reading",
    ];

    for zone in zones {
        let pathway = Pathway::fallback(zone).unwrap();
        assert!(!pathway.levels.is_empty(), "{} has no levels", zone);
        assert!(pathway.levels.iter().all(|level| !level.objectives.is_empty()));
    }
}

#[test]
fn given_unknown_zone_when_looking_up_fallback_then_returns_none() {
    assert_eq!(Pathway::fallback("vedic-accent"), None);
}

#[test]
fn given_blank_style_when_building_speech_then_uses_default_style() {
    let narration = SanskritSpeech::new("namaste", Some("  ".to_string()), NARRATION_STYLE);
    let command = SanskritSpeech::new("punar", None, COMMAND_STYLE);
    let custom = SanskritSpeech::new("om", Some("chant".to_string()), NARRATION_STYLE);

    assert_eq!(narration.style, "narration");
    assert_eq!(command.style, "command");
    assert_eq!(custom.style, "chant");
}

#[test]
fn given_unnamed_upload_when_building_drawing_then_uses_default_file_name() {
    let drawing = DrawingUpload::new(Bytes::from_static(b"PNG"), None, Some(String::new()));

    assert_eq!(drawing.file_name, DEFAULT_DRAWING_FILE_NAME);
    assert_eq!(drawing.content_type, None);
}
