mod common;

use common::MockBackend;
use glass_core::*;

const FIRM_PCM: &str = "pcm:/audio/glass-firm.wav";
const SOFT_PCM: &str = "pcm:/audio/glass-soft.wav";

fn make_engine() -> GlassEngine<MockBackend> {
    GlassEngine::new(MockBackend::new(), GlassConfig::default()).expect("default config is valid")
}

fn loaded_engine() -> GlassEngine<MockBackend> {
    let engine = make_engine();
    pollster::block_on(engine.load_samples());
    engine
}

#[test]
fn strike_before_load_is_silent() {
    let engine = make_engine();
    let strike = engine.on_pointer_enter(Some(SurfaceCategory::Logo));
    assert!(strike.is_some());
    assert!(engine.backend().played().is_empty());
    assert!(!engine.playback(SampleName::Soft, 0.2));
}

#[test]
fn unwatched_surface_produces_no_playback() {
    let engine = loaded_engine();
    engine.on_pointer_move(0.0, 0.0, 0.0);
    engine.on_pointer_move(100.0, 0.0, 20.0);
    assert_eq!(engine.on_pointer_enter(None), None);
    let press = engine.on_pointer_press(None);
    assert_eq!(press.tink, None);
    assert!(engine.backend().played().is_empty());
}

#[test]
fn enter_maps_tracked_velocity_to_volume() {
    let engine = loaded_engine();
    engine.on_pointer_move(0.0, 0.0, 100.0);
    engine.on_pointer_move(0.0, 20.0, 120.0); // 1 px/ms
    let strike = engine.on_pointer_enter(Some(SurfaceCategory::Logo)).unwrap();
    assert_eq!(strike.sample, SampleName::Firm);
    assert!((strike.volume - 0.10).abs() < 1e-6);

    let played = engine.backend().played();
    assert_eq!(played.len(), 1);
    assert_eq!(played[0].0, FIRM_PCM);
    assert!((played[0].1 - 0.10).abs() < 1e-6);
}

#[test]
fn enter_before_any_motion_uses_minimum_volume() {
    let engine = loaded_engine();
    let strike = engine.on_pointer_enter(Some(SurfaceCategory::Button)).unwrap();
    assert_eq!(strike.sample, SampleName::Soft);
    assert_eq!(strike.volume, engine.config().tuning.min_volume);
    assert_eq!(engine.backend().played()[0].0, SOFT_PCM);
}

#[test]
fn overlapping_strikes_each_get_their_own_voice() {
    let engine = loaded_engine();
    engine.on_pointer_move(0.0, 0.0, 0.0);
    engine.on_pointer_move(300.0, 0.0, 10.0); // fast
    engine.on_pointer_enter(Some(SurfaceCategory::Button));
    engine.on_pointer_enter(Some(SurfaceCategory::Button));
    engine.on_pointer_enter(Some(SurfaceCategory::Logo));

    let played = engine.backend().played();
    assert_eq!(played.len(), 3);
    assert_eq!(played[0], (SOFT_PCM.to_string(), 0.25));
    assert_eq!(played[1], (SOFT_PCM.to_string(), 0.25));
    assert_eq!(played[2], (FIRM_PCM.to_string(), 0.25));
}

#[test]
fn press_on_button_tinks_regardless_of_velocity() {
    let engine = loaded_engine();
    engine.on_pointer_move(0.0, 0.0, 0.0);
    engine.on_pointer_move(1000.0, 0.0, 10.0);
    let press = engine.on_pointer_press(Some(SurfaceCategory::Button));
    let tink = press.tink.expect("button press tinks");
    assert_eq!(tink.sample, SampleName::Firm);
    assert_eq!(tink.volume, 0.05);
    assert_eq!(engine.backend().played(), vec![(FIRM_PCM.to_string(), 0.05)]);
}

#[test]
fn press_on_logo_unlocks_without_tink() {
    let engine = make_engine();
    let press = engine.on_pointer_press(Some(SurfaceCategory::Logo));
    assert_eq!(press.tink, None);
    assert!(press.unlocked);
    assert!(engine.is_unlocked());
    assert_eq!(engine.engine_state(), EngineState::Running);
    assert!(engine.backend().played().is_empty());
}

#[test]
fn logo_press_then_hover_is_audible() {
    let engine = make_engine();
    if engine.on_pointer_press(Some(SurfaceCategory::Logo)).unlocked {
        pollster::block_on(engine.load_samples());
    }
    engine.on_pointer_move(0.0, 0.0, 0.0);
    engine.on_pointer_move(20.0, 0.0, 20.0);
    engine.on_pointer_enter(Some(SurfaceCategory::Logo));
    assert_eq!(engine.backend().played().len(), 1);
}

#[test]
fn press_off_surface_does_not_unlock_by_default() {
    let engine = make_engine();
    assert_eq!(engine.on_pointer_press(None), PressOutcome::default());
    assert_eq!(engine.engine_state(), EngineState::Suspended);
    assert!(!engine.is_unlocked());
}

#[test]
fn refused_resume_is_retried_on_next_gesture() {
    let engine = make_engine();
    engine.backend().resume_allowed.set(false);

    let first = engine.on_pointer_press(Some(SurfaceCategory::Button));
    assert!(first.unlocked);
    assert_eq!(engine.engine_state(), EngineState::Suspended);

    engine.backend().resume_allowed.set(true);
    let second = engine.on_pointer_press(Some(SurfaceCategory::Logo));
    // load was already requested by the first gesture
    assert!(!second.unlocked);
    assert_eq!(engine.backend().resumes.get(), 2);
    assert_eq!(engine.engine_state(), EngineState::Running);

    // once running, further presses leave the engine alone
    engine.on_pointer_press(Some(SurfaceCategory::Button));
    assert_eq!(engine.backend().resumes.get(), 2);
}

#[test]
fn key_press_unlocks_once_without_playback() {
    let engine = loaded_engine();
    let first = engine.on_key_press();
    assert!(first.unlocked);
    assert_eq!(first.tink, None);
    assert_eq!(engine.engine_state(), EngineState::Running);
    assert!(engine.backend().played().is_empty());

    assert!(!engine.on_key_press().unlocked);
    assert!(!engine.on_pointer_press(Some(SurfaceCategory::Button)).unlocked);
    assert_eq!(engine.backend().resumes.get(), 1);
}

#[test]
fn first_button_press_requests_load_exactly_once() {
    let engine = make_engine();
    assert_eq!(engine.engine_state(), EngineState::Suspended);

    let first = engine.on_pointer_press(Some(SurfaceCategory::Button));
    assert!(first.unlocked);
    assert_eq!(engine.engine_state(), EngineState::Running);
    assert_eq!(engine.backend().resumes.get(), 1);

    let second = engine.on_pointer_press(Some(SurfaceCategory::Button));
    assert!(!second.unlocked);
    assert_eq!(engine.backend().resumes.get(), 1);

    // A platform re-suspend is resumed again, but the load is not re-requested
    engine.backend().state.set(EngineState::Suspended);
    let third = engine.on_pointer_press(Some(SurfaceCategory::Button));
    assert!(!third.unlocked);
    assert_eq!(engine.backend().resumes.get(), 2);
}

#[test]
fn unlock_then_load_makes_strikes_audible() {
    let engine = make_engine();
    let press = engine.on_pointer_press(Some(SurfaceCategory::Button));
    // samples were not loaded yet, so the tink is silent
    assert!(engine.backend().played().is_empty());
    assert!(press.unlocked);

    pollster::block_on(engine.load_samples());
    engine.on_pointer_press(Some(SurfaceCategory::Button));
    assert_eq!(engine.backend().played().len(), 1);
}

#[test]
fn already_running_engine_still_unlocks_without_resume() {
    let backend = MockBackend::new();
    backend.state.set(EngineState::Running);
    let engine = GlassEngine::new(backend, GlassConfig::default()).unwrap();
    let press = engine.on_pointer_press(Some(SurfaceCategory::Button));
    assert!(press.unlocked);
    assert_eq!(engine.backend().resumes.get(), 0);
}

#[test]
fn press_anywhere_unlocks_when_configured() {
    let config = GlassConfig {
        unlock_on_any_press: true,
        ..GlassConfig::default()
    };
    let engine = GlassEngine::new(MockBackend::new(), config).unwrap();
    let press = engine.on_pointer_press(None);
    assert!(press.unlocked);
    assert_eq!(press.tink, None);
    assert_eq!(engine.engine_state(), EngineState::Running);
}

#[test]
fn playback_failure_is_reported_not_raised() {
    let engine = loaded_engine();
    engine.backend().fail_playback.set(true);
    assert!(!engine.playback(SampleName::Firm, 0.1));
    assert!(engine.on_pointer_enter(Some(SurfaceCategory::Logo)).is_some());
}

#[test]
fn unavailable_sample_stays_silent_while_the_other_plays() {
    let backend = MockBackend::new();
    backend
        .unreachable
        .borrow_mut()
        .push("/audio/glass-soft.wav".to_string());
    let engine = GlassEngine::new(backend, GlassConfig::default()).unwrap();
    pollster::block_on(engine.load_samples());

    assert!(!engine.playback(SampleName::Soft, 0.1));
    assert!(engine.playback(SampleName::Firm, 0.1));
}

#[test]
fn engine_uses_configured_sources_and_interval() {
    let config = GlassConfig {
        firm_source: "/static/firm.ogg".into(),
        soft_source: "/static/soft.ogg".into(),
        ..GlassConfig::from_preset(TuningPreset::Gentle)
    };
    let engine = GlassEngine::new(MockBackend::new(), config).unwrap();
    pollster::block_on(engine.load_samples());
    assert_eq!(engine.backend().fetch_count("/static/firm.ogg"), 1);
    assert_eq!(engine.backend().fetch_count("/static/soft.ogg"), 1);

    // Gentle has no minimum interval: a 1ms move still counts
    engine.on_pointer_move(0.0, 0.0, 0.0);
    assert_eq!(engine.on_pointer_move(2.0, 0.0, 1.0), Some(2.0));
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = GlassConfig::default();
    config.tuning.min_volume = 0.5;
    config.tuning.max_volume = 0.1;
    assert!(matches!(
        GlassEngine::new(MockBackend::new(), config),
        Err(ConfigError::InvertedVolumeBounds { .. })
    ));
}
