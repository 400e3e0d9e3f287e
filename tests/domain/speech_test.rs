use pathshala::domain::{
    DEFAULT_SPEECH_SPEED, MAX_SPEECH_SPEED, MIN_SPEECH_SPEED, PronunciationAttempt,
    SynthesisRequest,
};

#[test]
fn given_no_speed_when_building_request_then_uses_default() {
    let request = SynthesisRequest::new("om".to_string(), "hf_alpha".to_string(), None);

    assert_eq!(request.speed, DEFAULT_SPEECH_SPEED);
}

#[test]
fn given_speed_out_of_range_when_building_request_then_clamps() {
    let fast = SynthesisRequest::new("om".to_string(), "hf_alpha".to_string(), Some(4.0));
    let slow = SynthesisRequest::new("om".to_string(), "hf_alpha".to_string(), Some(0.1));

    assert_eq!(fast.speed, MAX_SPEECH_SPEED);
    assert_eq!(slow.speed, MIN_SPEECH_SPEED);
}

#[test]
fn given_non_finite_speed_when_building_request_then_uses_default() {
    let request = SynthesisRequest::new("om".to_string(), "hf_alpha".to_string(), Some(f32::NAN));

    assert_eq!(request.speed, DEFAULT_SPEECH_SPEED);
}

#[test]
fn given_no_user_when_recording_attempt_then_uses_default_user() {
    let attempt = PronunciationAttempt::new(
        bytes::Bytes::from_static(b"RIFF"),
        "namaste".to_string(),
        Some(String::new()),
    );

    assert_eq!(attempt.user_id, "default");
}
