//! Input adapter layer.
//!
//! Browser events are reduced to a [`NavInput`] by the wasm glue and then to an
//! [`Intent`] here, so the navigator never sees device details.

use crate::config::NavigatorConfig;
use crate::link::LinkTarget;

/// Raw navigation input, already stripped of browser types.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavInput<'a> {
    /// `KeyboardEvent.key`
    Key(&'a str),
    /// Click on a nav entry or jump button.
    Link(&'a LinkTarget),
    /// Touch released; x positions of touchstart and touchend.
    Swipe { start_x: f64, end_x: f64 },
    Wheel { delta_x: f64, delta_y: f64 },
    /// `location.hash` after a hashchange, with or without the `#`.
    Fragment(&'a str),
}

/// Device-independent navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent<'a> {
    GoTo(i64),
    Next,
    Previous,
    First,
    Last,
    Section(&'a str),
}

impl<'a> NavInput<'a> {
    /// Translate into an intent, or `None` when the input means nothing to
    /// the slider (the caller should then leave the browser default alone).
    pub fn intent(self, config: &NavigatorConfig) -> Option<Intent<'a>> {
        match self {
            NavInput::Key(key) => match key {
                "ArrowLeft" => Some(Intent::Previous),
                "ArrowRight" => Some(Intent::Next),
                "Home" => Some(Intent::First),
                "End" => Some(Intent::Last),
                _ => None,
            },
            NavInput::Link(LinkTarget::Section(id)) => Some(Intent::Section(id)),
            NavInput::Link(LinkTarget::Index(i)) => Some(Intent::GoTo(*i)),
            NavInput::Swipe { start_x, end_x } => {
                let diff = start_x - end_x;
                if diff.abs() > config.swipe_threshold_px {
                    // finger moved left: bring in the next section
                    Some(if diff > 0.0 {
                        Intent::Next
                    } else {
                        Intent::Previous
                    })
                } else {
                    None
                }
            }
            NavInput::Wheel { delta_x, delta_y } => {
                if delta_x.abs() > delta_y.abs() {
                    Some(if delta_x > 0.0 {
                        Intent::Next
                    } else {
                        Intent::Previous
                    })
                } else {
                    None
                }
            }
            NavInput::Fragment(raw) => {
                let trimmed = raw.strip_prefix('#').unwrap_or(raw);
                if trimmed.is_empty() {
                    Some(Intent::First)
                } else {
                    Some(Intent::Section(trimmed))
                }
            }
        }
    }
}
