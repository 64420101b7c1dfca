use std::collections::VecDeque;

use piano_scope::{
    dsp::{chord_wave, peak, triangle_wave, TimeAxis},
    keyboard::{KeyRect, KeyVisual, KeyboardLayout},
    pitch::{frequency, frequency_from_global_index},
    KeyId, PianoMessage, ScopeConfig, Session, WaveLabel,
};

#[test]
fn middle_c_at_octave_four() {
    let freq = frequency_from_global_index(0, 4).unwrap();
    assert!((freq - 261.6).abs() < 1e-9, "got {freq}");

    let mut session = Session::new(ScopeConfig::default()).unwrap();
    let wave = session.play(KeyId(0)).unwrap();
    assert_eq!(wave.len(), 2205);
    assert_eq!(wave.samples()[0], -1.0);
    assert_eq!(wave.label().to_string(), "Note: C4");
}

#[test]
fn holding_c4_and_e4_plots_normalized_chord() {
    let mut session = Session::new(ScopeConfig::default()).unwrap();
    session.toggle_hold(KeyId(0)).unwrap();
    let wave = session.toggle_hold(KeyId(4)).unwrap().clone();

    assert_eq!(wave.len(), 2205);
    assert_eq!(peak(wave.samples()), 1.0);
    assert_eq!(wave.label().names(), "C4, E4");
    assert_eq!(wave.label().to_string(), "Chord: C4, E4");

    // Same samples as synthesizing the two frequencies directly
    let axis = TimeAxis::linspace(0.05, 2205);
    let c4 = frequency_from_global_index(0, 4).unwrap();
    let e4 = frequency_from_global_index(4, 4).unwrap();
    assert_eq!(wave.samples(), chord_wave(&[c4, e4], &axis).as_slice());
}

#[test]
fn single_key_chord_matches_momentary_play() {
    let mut session = Session::new(ScopeConfig::default()).unwrap();
    let played = session.play(KeyId(9)).unwrap().clone();
    let held = session.toggle_hold(KeyId(9)).unwrap().clone();

    assert_eq!(held.label(), &WaveLabel::Chord(vec!["A4".into()]));
    assert_eq!(held.label().to_string(), played.label().to_string());
    for (a, b) in held.samples().iter().zip(played.samples()) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn upper_octave_keys_double_frequency() {
    let axis = TimeAxis::linspace(0.05, 2205);
    let mut session = Session::new(ScopeConfig::default()).unwrap();
    let wave = session.play(KeyId(12)).unwrap();
    assert_eq!(wave.label().to_string(), "Note: C5");
    let c5 = frequency(0, 5).unwrap();
    assert_eq!(wave.samples(), triangle_wave(c5, &axis).as_slice());
}

#[test]
fn queued_clicks_drive_the_keyboard() {
    let mut session = Session::new(ScopeConfig::default()).unwrap();
    let layout = KeyboardLayout::compute(session.keyboard(), KeyRect::new(0, 0, 84, 10));

    // Right click on the upper half between C and D lands on C#
    let key = layout.hit(6, 1).unwrap();
    let mut queue = VecDeque::from(vec![
        PianoMessage::ToggleHold { key },
        PianoMessage::SetOctave { octave: 3 },
    ]);
    session.drain(&mut queue);

    assert_eq!(key, KeyId(1));
    assert_eq!(session.octave(), 3);
    assert_eq!(session.waveform().label().to_string(), "Note: C#3");
    assert_eq!(
        session.keyboard().get(key).unwrap().visual,
        KeyVisual::Held
    );
}

#[test]
fn custom_window_sizes_the_buffer() {
    let config = ScopeConfig::default()
        .with_sample_rate(48_000)
        .with_duration(0.01);
    let mut session = Session::new(config).unwrap();
    assert_eq!(session.play(KeyId(0)).unwrap().len(), 480);
}
