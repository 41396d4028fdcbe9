//! Scripted play sessions driven through the frame driver

use dance_runaway::assets::{PIRATE, TROLL};
use dance_runaway::autopilot::Autopilot;
use dance_runaway::input::Input;
use dance_runaway::sim::{Button, Outcome};
use dance_runaway::sprite::{FrameSet, MaskedSprite, Raster};
use dance_runaway::{AssetProvider, Cast, ProceduralAssets, Scene, Session, Tuning};

const FRAME_DT: f64 = 1.0 / 30.0;

/// Fully opaque two-frame run cycles: a 24px runaway and a 32px chaser
fn block_cast() -> Cast {
    let frames = |width| {
        let sprite = MaskedSprite::new(Raster::filled(width, 40, [200, 80, 40, 255]))
            .expect("opaque sprite");
        FrameSet::new(vec![sprite.clone(), sprite]).expect("two frames")
    };
    Cast {
        runaway: frames(24),
        chaser: frames(32),
    }
}

/// Press one foot per frame, alternating, until the session ends or time runs out
fn dance(session: &mut Session, seconds: f64) -> Option<Scene> {
    let frames = (seconds / FRAME_DT) as u64;
    let mut foot = Button::Left;
    for k in 1..=frames {
        let now = k as f64 * FRAME_DT;
        let scene = session.frame(now, [Input::ButtonDown(foot)]);
        foot = foot.other_foot().unwrap_or(Button::Left);
        if let Scene::GameOver(_) = scene {
            return Some(scene);
        }
    }
    None
}

/// Stand still until the session ends or time runs out
fn idle(session: &mut Session, seconds: f64) -> Option<Scene> {
    let frames = (seconds / FRAME_DT) as u64;
    for k in 1..=frames {
        let scene = session.frame(k as f64 * FRAME_DT, []);
        if let Scene::GameOver(_) = scene {
            return Some(scene);
        }
    }
    None
}

#[test]
fn test_dancing_through_every_level_wins() {
    let mut session = Session::new(0.0, block_cast(), 3, Tuning::default());

    let scene = dance(&mut session, 120.0);

    assert!(matches!(scene, Some(Scene::GameOver(_))), "session never ended");
    let state = session.state();
    assert_eq!(state.outcome, Outcome::Won);
    assert_eq!(state.level_index, 2);
    // 17 * 1.5 * 1.5, still under the cap
    assert!((state.chaser.velocity - 38.25).abs() < 1e-3);
    assert!(state.runaway.velocity <= 45.0);
}

#[test]
fn test_standing_still_gets_busted() {
    let mut session = Session::new(0.0, block_cast(), 3, Tuning::default());

    let scene = idle(&mut session, 10.0);

    assert!(matches!(scene, Some(Scene::GameOver(_))), "session never ended");
    let state = session.state();
    assert_eq!(state.outcome, Outcome::Lost);
    assert_eq!(state.level_index, 0);
    // The chaser needs about 52px at 17px/s to reach the runaway's first column
    assert!(state.elapsed() > 2.9 && state.elapsed() < 3.2, "{}", state.elapsed());
    assert_eq!(state.runaway.actor.position.x, 51.0);
}

#[test]
fn test_state_is_frozen_after_game_over() {
    let mut session = Session::new(0.0, block_cast(), 1, Tuning::default());
    idle(&mut session, 10.0);
    let frozen = session.state().clone();

    let scene = session.frame(20.0, [Input::ButtonDown(Button::Left)]);

    assert_eq!(scene, Scene::Unchanged);
    assert_eq!(session.state(), &frozen);
}

#[test]
fn test_single_step_coasts_to_a_stop() {
    let mut session = Session::new(0.0, block_cast(), 3, Tuning::default());
    session.frame(FRAME_DT, [Input::ButtonDown(Button::Right)]);
    assert_eq!(session.state().runaway.velocity, 6.0);

    for k in 2..=30 {
        session.frame(k as f64 * FRAME_DT, []);
    }
    let state = session.state();
    assert_eq!(state.runaway.velocity, 0.0);
    assert_eq!(state.runaway.next_frame_swap_at, None);

    // 6px/s braked at 20px/s² travels under a pixel
    let x = state.runaway.actor.position.x;
    assert!(x > 51.0 && x < 52.5, "{x}");

    session.frame(31.0 * FRAME_DT, []);
    assert_eq!(session.state().runaway.actor.position.x, x);
}

#[test]
fn test_stamping_one_foot_makes_one_step() {
    let mut session = Session::new(0.0, block_cast(), 3, Tuning::default());

    session.frame(
        FRAME_DT,
        [
            Input::ButtonDown(Button::Left),
            Input::ButtonDown(Button::Left),
            Input::ButtonDown(Button::Left),
            Input::ButtonDown(Button::Up),
            Input::ButtonDown(Button::Cross),
        ],
    );

    assert_eq!(session.state().runaway.velocity, 6.0);
    assert_eq!(session.state().runaway.pending_button, Some(Button::Right));
}

#[test]
fn test_restart_mid_game_resets_the_chase() {
    let mut session = Session::new(0.0, block_cast(), 3, Tuning::default());
    dance(&mut session, 2.0);
    assert!(session.state().runaway.actor.position.x > 51.0);

    let scene = session.frame(2.5, [Input::Restart]);

    assert_eq!(scene, Scene::Game);
    let state = session.state();
    assert_eq!(state.clock_at_start, 2.5);
    assert_eq!(state.runaway.velocity, 0.0);
    assert_eq!(state.runaway.actor.position.x, 51.0);
    assert_eq!(state.chaser.velocity, 17.0);
}

#[test]
fn test_quit_wins_over_game_over() {
    let mut session = Session::new(0.0, block_cast(), 1, Tuning::default());
    idle(&mut session, 10.0);

    assert_eq!(session.frame(11.0, [Input::Quit]), Scene::Quit);
    assert_eq!(session.frame(12.0, []), Scene::Quit);
}

#[test]
fn test_autopilot_finishes_a_procedural_session() {
    let media = ProceduralAssets::default().load().expect("procedural media");
    let cast = media.cast(PIRATE, TROLL).expect("pirate and troll");
    let mut session = Session::new(0.0, cast, media.level_count(), Tuning::default());
    let mut pilot = Autopilot::new(42, 0.0);

    let mut ended = None;
    for k in 1..=(300 * 30) {
        let now = k as f64 * FRAME_DT;
        if let Scene::GameOver(kind) = session.frame(now, pilot.poll(now)) {
            ended = Some(kind);
            break;
        }
    }

    assert!(ended.is_some(), "autopilot session never ended");
    assert!(session.state().outcome.is_over());
}
