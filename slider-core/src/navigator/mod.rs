//! Section navigator: which section is presented and the transition lock.
//!
//! The navigator is a two-state machine. An accepted [`SectionNavigator::go_to`]
//! moves it from [`Phase::Idle`] to [`Phase::Transitioning`] and asks the
//! surface to call back after the transition duration; the callback lands in
//! [`SectionNavigator::settle`]. Anything requested while transitioning is
//! dropped, not queued.

use log::{debug, trace};

use crate::config::NavigatorConfig;
use crate::input::Intent;
use crate::section::{Section, SectionCatalog};
use crate::slide_transform;

#[cfg(test)]
mod tests;

/// How a transform should be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Startup placement, no CSS transition.
    Instant,
    Animated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

/// Snapshot of the navigator state for readers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigatorState {
    pub current_index: usize,
    pub phase: Phase,
}

/// Everything the navigator does to the outside world.
pub trait NavigatorSurface {
    /// Set the slide container's transform.
    fn apply_transform(&mut self, transform: &str, motion: Motion);
    /// Mark the nav entry and section at `section.index` active, all others inactive.
    fn mark_active(&mut self, section: &Section);
    /// Replace the address-bar fragment without adding a history entry.
    fn replace_fragment(&mut self, id: &str);
    /// Arrange for [`SectionNavigator::settle`] to run after `after_ms`.
    /// Returns `false` if no callback could be arranged; the navigator then
    /// settles immediately.
    fn schedule_settle(&mut self, after_ms: u32) -> bool;
}

pub struct SectionNavigator<S: NavigatorSurface> {
    catalog: SectionCatalog,
    surface: S,
    transition_ms: u32,
    state: NavigatorState,
    // address bar moved on during a transition and must be put back
    fragment_stale: bool,
}

impl<S: NavigatorSurface> SectionNavigator<S> {
    /// Create the navigator and place it on the section named by `fragment`
    /// (or the first one) without animating.
    pub fn new(
        catalog: SectionCatalog,
        surface: S,
        config: &NavigatorConfig,
        fragment: Option<&str>,
    ) -> Self {
        let start = fragment.and_then(|f| catalog.resolve(f)).unwrap_or(0);
        let mut nav = SectionNavigator {
            catalog,
            surface,
            transition_ms: config.transition_ms,
            state: NavigatorState {
                current_index: start,
                phase: Phase::Idle,
            },
            fragment_stale: false,
        };
        nav.place();
        nav
    }

    fn place(&mut self) {
        let index = self.state.current_index;
        trace!("slider: place at section {index}");
        self.surface
            .apply_transform(&slide_transform(index), Motion::Instant);
        self.surface.mark_active(&self.catalog[index]);
    }

    pub fn catalog(&self) -> &SectionCatalog {
        &self.catalog
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn state(&self) -> NavigatorState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn current_section(&self) -> &Section {
        &self.catalog[self.state.current_index]
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.phase == Phase::Transitioning
    }

    /// Move to `index`, clamped into range. Returns whether a transition started.
    pub fn go_to(&mut self, index: i64) -> bool {
        if self.is_transitioning() {
            debug!("slider: dropped go_to({index}) during transition");
            return false;
        }
        let last = self.catalog.last_index() as i64;
        let target = index.clamp(0, last) as usize;
        if target == self.state.current_index {
            return false;
        }

        self.state.phase = Phase::Transitioning;
        self.state.current_index = target;
        let section = &self.catalog[target];
        debug!("slider: -> section {target} ({})", section.id);

        self.surface
            .apply_transform(&slide_transform(target), Motion::Animated);
        self.surface.mark_active(section);
        self.surface.replace_fragment(&section.id);
        if !self.surface.schedule_settle(self.transition_ms) {
            self.state.phase = Phase::Idle;
        }
        true
    }

    /// End of the transition window.
    pub fn settle(&mut self) {
        if self.state.phase == Phase::Transitioning {
            trace!("slider: settled at {}", self.state.current_index);
            self.state.phase = Phase::Idle;
            if self.fragment_stale {
                self.fragment_stale = false;
                let id = &self.catalog[self.state.current_index].id;
                self.surface.replace_fragment(id);
            }
        }
    }

    pub fn next(&mut self) -> bool {
        let n = self.catalog.len();
        self.go_to(((self.state.current_index + 1) % n) as i64)
    }

    pub fn previous(&mut self) -> bool {
        let n = self.catalog.len();
        self.go_to(((self.state.current_index + n - 1) % n) as i64)
    }

    pub fn first(&mut self) -> bool {
        self.go_to(0)
    }

    pub fn last(&mut self) -> bool {
        self.go_to(self.catalog.last_index() as i64)
    }

    /// Navigate by section id or label; unknown identifiers are ignored.
    pub fn go_to_section(&mut self, identifier: &str) -> bool {
        match self.catalog.resolve(identifier) {
            Some(index) => self.go_to(index as i64),
            None => {
                debug!("slider: unknown section {identifier:?}");
                false
            }
        }
    }

    /// Follow a fragment change from back/forward or a manual edit.
    ///
    /// Like any input it is dropped mid-transition; if it named a section,
    /// the address bar is put back to the presented one on settle.
    pub fn follow_fragment(&mut self, intent: Intent<'_>) -> bool {
        if self.is_transitioning() {
            let known = match intent {
                Intent::Section(id) => self.catalog.resolve(id).is_some(),
                _ => true,
            };
            if known {
                debug!("slider: fragment change dropped during transition");
                self.fragment_stale = true;
            }
            return false;
        }
        self.dispatch(intent)
    }

    pub fn dispatch(&mut self, intent: Intent<'_>) -> bool {
        match intent {
            Intent::GoTo(index) => self.go_to(index),
            Intent::Next => self.next(),
            Intent::Previous => self.previous(),
            Intent::First => self.first(),
            Intent::Last => self.last(),
            Intent::Section(id) => self.go_to_section(id),
        }
    }
}
