//! Two-state hover interaction for project cards.
//!
//! A card is either at `rest` or in `hover`. The visual transform is a pure
//! function of that one boolean; [`CardHover`] only tracks whether the pointer
//! is currently over the card.

use serde::Serialize;

pub const CARD_TRANSITION_SECS: f64 = 0.28;
pub const HOVER_LIFT_PX: f64 = -8.0;
pub const HOVER_SCALE: f64 = 1.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardState {
    Rest,
    Hover,
}

impl CardState {
    pub fn from_hovered(hovered: bool) -> Self {
        if hovered {
            CardState::Hover
        } else {
            CardState::Rest
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CardState::Rest => "rest",
            CardState::Hover => "hover",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardTransform {
    pub offset_y_px: f64,
    pub scale: f64,
    pub transition_secs: f64,
}

impl CardTransform {
    pub fn css_transform(&self) -> String {
        format!("translateY({}px) scale({})", self.offset_y_px, self.scale)
    }

    pub fn css_transition(&self) -> String {
        format!("transform {}s ease-out", self.transition_secs)
    }
}

pub fn card_transform(hovered: bool) -> CardTransform {
    match CardState::from_hovered(hovered) {
        CardState::Rest => CardTransform {
            offset_y_px: 0.0,
            scale: 1.0,
            transition_secs: CARD_TRANSITION_SECS,
        },
        CardState::Hover => CardTransform {
            offset_y_px: HOVER_LIFT_PX,
            scale: HOVER_SCALE,
            transition_secs: CARD_TRANSITION_SECS,
        },
    }
}

/// Per-card pointer tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardHover {
    hovered: bool,
}

impl CardHover {
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    pub fn state(&self) -> CardState {
        CardState::from_hovered(self.hovered)
    }

    pub fn transform(&self) -> CardTransform {
        card_transform(self.hovered)
    }
}

/// CSS rules for both states. The transition sits on the base rule so that
/// leaving hover eases back with the same duration.
pub fn hover_css(selector: &str) -> String {
    let rest = card_transform(false);
    let hover = card_transform(true);
    format!(
        "{sel} {{ transform: {rest}; transition: {transition}; }}\n\
         {sel}:hover {{ transform: {hover}; }}\n",
        sel = selector,
        rest = rest.css_transform(),
        transition = rest.css_transition(),
        hover = hover.css_transform(),
    )
}
