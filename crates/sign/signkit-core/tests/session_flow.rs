use std::cell::{Cell, RefCell};
use std::f32::consts::PI;
use std::rc::Rc;

use signkit_core::signs::{NECK, RIGHT_ARM, RIGHT_HAND};
use signkit_core::{
    AvatarSession, Axis, FileModelLoader, HeadlessSurface, JointTree, Property, QueueItem,
    RenderSurface, SequencerConfig, SignError, Skeleton,
};
use signkit_test_fixtures::rigs;

const DT: f32 = 0.03125;

fn fast() -> SequencerConfig {
    SequencerConfig::new(0.5, 0.0)
}

fn ybot() -> Skeleton {
    Skeleton::from_json(&rigs::json("ybot").unwrap()).unwrap()
}

fn settle<R: RenderSurface>(session: &mut AvatarSession<Skeleton, R>) {
    for _ in 0..10_000 {
        if !session.step(DT).keep_ticking {
            return;
        }
    }
    panic!("session never went idle");
}

#[test]
fn load_queues_rest_pose_once() {
    let mut loader = FileModelLoader::new(rigs::root());
    let mut session =
        AvatarSession::load(&mut loader, "rigs/ybot.json", HeadlessSurface::default(), fast())
            .unwrap();
    assert_eq!(session.history(), &[" ".to_string()]);
    assert_eq!(session.sequencer().len(), 1);
    assert_eq!(session.surface().frames, 1);

    settle(&mut session);
    let neck = session
        .model()
        .joint_value(NECK, Property::Rotation, Axis::X)
        .unwrap();
    assert_eq!(neck, PI / 12.0);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn missing_model_is_reported_and_nothing_is_built() {
    let mut loader = FileModelLoader::new(rigs::root());
    let result = AvatarSession::load(
        &mut loader,
        "rigs/missing.json",
        HeadlessSurface::default(),
        fast(),
    );
    match result {
        Err(SignError::ModelLoad { path, .. }) => assert_eq!(path, "rigs/missing.json"),
        Err(other) => panic!("unexpected error {other:?}"),
        Ok(_) => panic!("session built without a model"),
    }
}

#[test]
fn invalid_config_is_rejected() {
    let result = AvatarSession::new(
        ybot(),
        HeadlessSurface::default(),
        SequencerConfig::new(0.0, 800.0),
    );
    assert!(matches!(result, Err(SignError::InvalidConfig { .. })));
}

#[test]
fn request_sign_refuses_while_busy() {
    let mut session = AvatarSession::new(ybot(), HeadlessSurface::default(), fast()).unwrap();
    assert_eq!(session.request_sign("A"), Err(SignError::Busy));

    settle(&mut session);
    assert_eq!(session.request_sign("A"), Ok(true));
    assert_eq!(session.history(), &[" ".to_string(), "A".to_string()]);
    settle(&mut session);

    let arm = session
        .model()
        .joint_value(RIGHT_ARM, Property::Rotation, Axis::Z)
        .unwrap();
    assert_eq!(arm, PI / 6.0);
    let index_tip = session
        .model()
        .joint_value("mixamorigRightHandIndex3", Property::Rotation, Axis::Z)
        .unwrap();
    assert_eq!(index_tip, PI / 2.0);
}

#[test]
fn unregistered_token_still_plays_placeholder() {
    let mut session = AvatarSession::new(ybot(), HeadlessSurface::default(), fast()).unwrap();
    settle(&mut session);

    assert_eq!(session.request_sign("Q"), Ok(true));
    assert_eq!(session.history().last().map(String::as_str), Some("Q"));
    match session.sequencer().queue().next() {
        Some(QueueItem::Pose(batch)) => {
            assert_eq!(batch.label.as_deref(), Some("Q"));
            assert!(!batch.is_empty());
        }
        other => panic!("expected a pose batch, got {other:?}"),
    }
    settle(&mut session);
    assert!(session.is_idle());
}

#[test]
fn compile_text_spells_and_captions_in_lockstep() {
    let mut session = AvatarSession::new(ybot(), HeadlessSurface::default(), fast()).unwrap();
    settle(&mut session);

    let received = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = Rc::clone(&received);
    session.set_subtitle_sink(move |text: &str| sink.borrow_mut().push(text.to_string()));

    assert!(session.compile_text("time hi", true));
    // TIME is a word, H and I are spelled: three signs, three markers
    assert_eq!(session.sequencer().len(), 6);
    assert_eq!(&session.history()[1..], &["TIME", "H", "I"]);
    assert_eq!(session.caption(), "");

    // the first caption fragment arrives before any motion for TIME
    session.step(DT);
    assert_eq!(session.caption(), "TIME ");

    settle(&mut session);
    assert_eq!(session.caption(), "TIME HI ");
    assert_eq!(*received.borrow(), vec!["TIME ", "H", "I "]);
}

#[test]
fn compile_without_subtitles_keeps_caption() {
    let mut session = AvatarSession::new(ybot(), HeadlessSurface::default(), fast()).unwrap();
    session.compile_text("you", true);
    settle(&mut session);
    assert_eq!(session.caption(), "YOU ");

    assert!(session.compile_text("b", false));
    assert_eq!(session.sequencer().len(), 1);
    settle(&mut session);
    assert_eq!(session.caption(), "YOU ");
}

#[test]
fn signs_tolerate_rigs_without_fingers() {
    let arms = Skeleton::from_json(&rigs::json("arms-only").unwrap()).unwrap();
    let mut session = AvatarSession::new(arms, HeadlessSurface::default(), fast()).unwrap();
    settle(&mut session);
    session.enqueue_sign("L");
    settle(&mut session);
    let arm = session
        .model()
        .joint_value(RIGHT_ARM, Property::Rotation, Axis::Z)
        .unwrap();
    assert_eq!(arm, PI / 6.0);
}

#[test]
fn letters_after_a_word_bring_the_arm_back() {
    let mut session = AvatarSession::new(ybot(), HeadlessSurface::default(), fast()).unwrap();
    settle(&mut session);
    session.enqueue_sign("YOU");
    settle(&mut session);
    let reach = |s: &AvatarSession<Skeleton, HeadlessSurface>| {
        s.model()
            .joint_value(RIGHT_ARM, Property::Rotation, Axis::X)
            .unwrap()
    };
    assert_eq!(reach(&session), PI / 8.0);

    session.enqueue_sign("A");
    settle(&mut session);
    assert_eq!(reach(&session), 0.0);

    session.enqueue_sign("TIME");
    session.enqueue_sign("Q");
    settle(&mut session);
    assert_eq!(reach(&session), 0.0);
    let wrist = session
        .model()
        .joint_value(RIGHT_HAND, Property::Rotation, Axis::X)
        .unwrap();
    assert_eq!(wrist, 0.0);
}

#[test]
fn clear_cancels_pending_playback() {
    let mut session = AvatarSession::new(ybot(), HeadlessSurface::default(), fast()).unwrap();
    session.compile_text("bridgely", false);
    session.step(DT);
    session.clear();
    assert!(session.is_idle());
    assert!(session.sequencer().is_empty());
    assert!(!session.step(DT).rendered);
    assert_eq!(session.request_sign("A"), Ok(true));
}

#[derive(Default)]
struct TrackingSurface {
    frames: Rc<Cell<u32>>,
    disposed: Rc<Cell<bool>>,
}

impl RenderSurface for TrackingSurface {
    fn render(&mut self) {
        self.frames.set(self.frames.get() + 1);
    }

    fn dispose(&mut self) {
        self.disposed.set(true);
    }
}

#[test]
fn dropping_a_session_disposes_its_surface() {
    let surface = TrackingSurface::default();
    let disposed = Rc::clone(&surface.disposed);
    let frames = Rc::clone(&surface.frames);

    let mut session = AvatarSession::new(ybot(), surface, fast()).unwrap();
    session.step(DT);
    assert_eq!(frames.get(), 2);
    assert!(!disposed.get());

    // switching avatars: the old session goes first
    drop(session);
    assert!(disposed.get());
    let _next = AvatarSession::new(ybot(), TrackingSurface::default(), fast()).unwrap();
}
