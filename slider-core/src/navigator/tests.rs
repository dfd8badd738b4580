use super::*;
use crate::input::{Intent, NavInput};
use crate::link::LinkTarget;

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Transform(String, Motion),
    Active(usize),
    Fragment(String),
    Settle(u32),
}

#[derive(Default)]
struct RecordingSurface {
    calls: Vec<Call>,
    no_timer: bool,
}

impl NavigatorSurface for RecordingSurface {
    fn apply_transform(&mut self, transform: &str, motion: Motion) {
        self.calls.push(Call::Transform(transform.to_string(), motion));
    }

    fn mark_active(&mut self, section: &Section) {
        self.calls.push(Call::Active(section.index));
    }

    fn replace_fragment(&mut self, id: &str) {
        self.calls.push(Call::Fragment(id.to_string()));
    }

    fn schedule_settle(&mut self, after_ms: u32) -> bool {
        self.calls.push(Call::Settle(after_ms));
        !self.no_timer
    }
}

const IDS: [&str; 6] = ["home", "about", "resume", "services", "portfolio", "contact"];

fn catalog() -> SectionCatalog {
    SectionCatalog::from_entries([
        ("home", "Home"),
        ("about", "About"),
        ("resume", "Resume"),
        ("services", "Services"),
        ("portfolio", "Projects"),
        ("contact", "Contact"),
    ])
    .unwrap()
}

fn navigator_at(fragment: Option<&str>) -> SectionNavigator<RecordingSurface> {
    SectionNavigator::new(
        catalog(),
        RecordingSurface::default(),
        &NavigatorConfig::default(),
        fragment,
    )
}

fn navigator() -> SectionNavigator<RecordingSurface> {
    navigator_at(None)
}

/// Jump to `index` and let the transition finish.
fn settled_at(index: usize) -> SectionNavigator<RecordingSurface> {
    let mut nav = navigator();
    nav.go_to(index as i64);
    nav.settle();
    nav
}

fn calls(nav: &SectionNavigator<RecordingSurface>) -> &[Call] {
    &nav.surface().calls
}

#[test]
fn starts_at_first_section_without_transition() {
    let nav = navigator();
    assert_eq!(nav.current_index(), 0);
    assert!(!nav.is_transitioning());
    assert_eq!(
        calls(&nav),
        &[
            Call::Transform("translateX(0vw)".into(), Motion::Instant),
            Call::Active(0),
        ]
    );
}

#[test]
fn deep_link_places_instantly() {
    let nav = navigator_at(Some("#portfolio"));
    assert_eq!(nav.current_index(), 4);
    assert_eq!(nav.current_section().id, "portfolio");
    assert_eq!(
        nav.state(),
        NavigatorState {
            current_index: 4,
            phase: Phase::Idle
        }
    );
    // no settle scheduled means the lock was never taken
    assert_eq!(
        calls(&nav),
        &[
            Call::Transform("translateX(-400vw)".into(), Motion::Instant),
            Call::Active(4),
        ]
    );
}

#[test]
fn unknown_deep_link_falls_back_to_first() {
    let nav = navigator_at(Some("#blog"));
    assert_eq!(nav.current_index(), 0);
    let nav = navigator_at(Some(""));
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn go_to_clamps_every_index() {
    for i in -20_i64..20 {
        let mut nav = navigator();
        nav.go_to(i);
        assert_eq!(nav.current_index() as i64, i.clamp(0, 5), "go_to({i})");
    }
    let mut nav = navigator();
    nav.go_to(i64::MAX);
    assert_eq!(nav.current_index(), 5);
    nav.settle();
    nav.go_to(i64::MIN);
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn accepted_go_to_touches_the_surface_once_each() {
    let mut nav = navigator();
    assert!(nav.go_to(2));
    assert!(nav.is_transitioning());
    assert_eq!(
        &calls(&nav)[2..],
        &[
            Call::Transform("translateX(-200vw)".into(), Motion::Animated),
            Call::Active(2),
            Call::Fragment("resume".into()),
            Call::Settle(800),
        ]
    );
}

#[test]
fn settle_uses_configured_duration() {
    let config = NavigatorConfig {
        transition_ms: 250,
        ..NavigatorConfig::default()
    };
    let mut nav = SectionNavigator::new(catalog(), RecordingSurface::default(), &config, None);
    nav.go_to(1);
    assert_eq!(calls(&nav).last(), Some(&Call::Settle(250)));
}

#[test]
fn missing_timer_does_not_leave_the_lock_held() {
    let surface = RecordingSurface {
        no_timer: true,
        ..RecordingSurface::default()
    };
    let mut nav = SectionNavigator::new(catalog(), surface, &NavigatorConfig::default(), None);
    assert!(nav.go_to(2));
    assert!(!nav.is_transitioning());
    assert!(nav.next());
    assert_eq!(nav.current_index(), 3);
}

#[test]
fn go_to_current_is_a_no_op() {
    let mut nav = settled_at(3);
    let before = calls(&nav).len();
    let state = nav.state();
    assert!(!nav.go_to(3));
    assert_eq!(nav.state(), state);
    assert!(!nav.is_transitioning());
    assert_eq!(calls(&nav).len(), before);
}

#[test]
fn clamped_index_equal_to_current_is_a_no_op() {
    let mut nav = navigator();
    assert!(!nav.go_to(-1));
    assert!(!nav.is_transitioning());
    assert_eq!(calls(&nav).len(), 2);
}

#[test]
fn inputs_are_dropped_while_transitioning() {
    let mut nav = navigator();
    assert!(nav.go_to(1));
    let before = calls(&nav).len();

    assert!(!nav.go_to(4));
    assert!(!nav.next());
    assert!(!nav.previous());
    assert!(!nav.first());
    assert!(!nav.last());
    assert!(!nav.go_to_section("contact"));
    assert_eq!(nav.current_index(), 1);
    assert_eq!(calls(&nav).len(), before);

    // dropped, not queued
    nav.settle();
    assert!(!nav.is_transitioning());
    assert_eq!(nav.current_index(), 1);
    assert_eq!(calls(&nav).len(), before);

    assert!(nav.go_to(4));
    assert_eq!(nav.current_index(), 4);
}

#[test]
fn settle_while_idle_changes_nothing() {
    let mut nav = navigator();
    nav.settle();
    assert_eq!(
        nav.state(),
        NavigatorState {
            current_index: 0,
            phase: Phase::Idle
        }
    );
    assert_eq!(calls(&nav).len(), 2);
}

#[test]
fn next_wraps_around() {
    let mut nav = settled_at(5);
    assert!(nav.next());
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn previous_wraps_around() {
    let mut nav = navigator();
    assert!(nav.previous());
    assert_eq!(nav.current_index(), 5);
}

#[test]
fn next_n_times_returns_to_start() {
    for start in 0..IDS.len() {
        let mut nav = settled_at(start);
        for _ in 0..IDS.len() {
            assert!(nav.next());
            nav.settle();
        }
        assert_eq!(nav.current_index(), start);
    }
}

#[test]
fn previous_undoes_next() {
    for k in 0..IDS.len() {
        let mut nav = settled_at(k);
        nav.next();
        nav.settle();
        nav.previous();
        nav.settle();
        assert_eq!(nav.current_index(), k);
    }
}

#[test]
fn first_and_last() {
    let mut nav = settled_at(2);
    assert!(nav.last());
    assert_eq!(nav.current_index(), 5);
    nav.settle();
    assert!(nav.first());
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn go_to_section_by_id_or_label() {
    let mut nav = navigator();
    assert!(nav.go_to_section("portfolio"));
    assert_eq!(nav.current_index(), 4);
    nav.settle();

    assert!(nav.go_to_section("About"));
    assert_eq!(nav.current_index(), 1);
    nav.settle();

    let before = calls(&nav).len();
    assert!(!nav.go_to_section("unknown"));
    assert_eq!(nav.current_index(), 1);
    assert_eq!(calls(&nav).len(), before);
}

#[test]
fn concrete_six_section_scenario() {
    let mut nav = settled_at(3);
    nav.go_to(-1);
    assert_eq!(nav.current_index(), 0);
    nav.settle();
    nav.go_to(10);
    assert_eq!(nav.current_index(), 5);
    nav.settle();

    let mut nav = navigator();
    nav.previous();
    assert_eq!(nav.current_index(), 5);
    nav.settle();
    nav.next();
    assert_eq!(nav.current_index(), 0);
    nav.settle();

    nav.go_to_section("portfolio");
    assert_eq!(nav.current_index(), 4);
    nav.settle();
    nav.go_to_section("unknown");
    assert_eq!(nav.current_index(), 4);
}

#[test]
fn fragment_mirrors_every_accepted_move() {
    let mut nav = navigator();
    for id in IDS.iter().skip(1) {
        nav.go_to_section(id);
        nav.settle();
        assert_eq!(calls(&nav).iter().rev().nth(1), Some(&Call::Fragment(id.to_string())));
    }
}

#[test]
fn dispatch_routes_inputs() {
    let config = NavigatorConfig::default();
    let mut nav = navigator();

    let drive = |nav: &mut SectionNavigator<RecordingSurface>, input: NavInput<'_>| {
        let accepted = input
            .intent(&config)
            .map(|intent| nav.dispatch(intent))
            .unwrap_or(false);
        nav.settle();
        accepted
    };

    assert!(drive(&mut nav, NavInput::Key("End")));
    assert_eq!(nav.current_index(), 5);
    assert!(drive(&mut nav, NavInput::Key("ArrowRight")));
    assert_eq!(nav.current_index(), 0);
    assert!(drive(&mut nav, NavInput::Key("ArrowLeft")));
    assert_eq!(nav.current_index(), 5);
    assert!(drive(&mut nav, NavInput::Key("Home")));
    assert_eq!(nav.current_index(), 0);

    let about = LinkTarget::Section("about".into());
    assert!(drive(&mut nav, NavInput::Link(&about)));
    assert_eq!(nav.current_index(), 1);
    let third = LinkTarget::Index(3);
    assert!(drive(&mut nav, NavInput::Link(&third)));
    assert_eq!(nav.current_index(), 3);

    assert!(drive(
        &mut nav,
        NavInput::Swipe {
            start_x: 400.0,
            end_x: 100.0
        }
    ));
    assert_eq!(nav.current_index(), 4);
    assert!(drive(
        &mut nav,
        NavInput::Wheel {
            delta_x: -30.0,
            delta_y: 2.0
        }
    ));
    assert_eq!(nav.current_index(), 3);
    assert!(!drive(
        &mut nav,
        NavInput::Wheel {
            delta_x: 2.0,
            delta_y: 30.0
        }
    ));
    assert_eq!(nav.current_index(), 3);

    assert!(drive(&mut nav, NavInput::Fragment("#contact")));
    assert_eq!(nav.current_index(), 5);
    assert!(drive(&mut nav, NavInput::Fragment("")));
    assert_eq!(nav.current_index(), 0);
    assert!(!drive(&mut nav, NavInput::Fragment("#nowhere")));
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn fragment_change_during_transition_is_put_back_on_settle() {
    let mut nav = navigator();
    assert!(nav.go_to(2));
    // back button lands on #about while sliding to resume
    assert!(!nav.follow_fragment(Intent::Section("about")));
    assert_eq!(nav.current_index(), 2);
    let before = calls(&nav).len();

    nav.settle();
    assert_eq!(nav.current_index(), 2);
    assert_eq!(&calls(&nav)[before..], &[Call::Fragment("resume".into())]);

    // only once
    nav.settle();
    assert_eq!(calls(&nav).len(), before + 1);
}

#[test]
fn unknown_fragment_during_transition_is_left_alone() {
    let mut nav = navigator();
    assert!(nav.go_to(2));
    assert!(!nav.follow_fragment(Intent::Section("skills")));
    let before = calls(&nav).len();
    nav.settle();
    assert_eq!(calls(&nav).len(), before);
}

#[test]
fn fragment_change_while_idle_navigates() {
    let mut nav = navigator();
    assert!(nav.follow_fragment(Intent::Section("contact")));
    assert_eq!(nav.current_index(), 5);
    nav.settle();
    assert!(nav.follow_fragment(Intent::First));
    assert_eq!(nav.current_index(), 0);
}
