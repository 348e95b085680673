// src/controllers/responsive.rs
//
// Desktop classification state machine.
// Active while the viewport is wider than the breakpoint.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponsiveState {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponsiveTransition {
    Activated,
    Deactivated,
    Unchanged,
}

#[derive(Debug)]
pub struct ResponsiveController {
    min_width: f32,
    state: ResponsiveState,
}

impl ResponsiveController {
    /// Classifies once from the width at mount.
    pub fn new(min_width: f32, viewport_width: f32) -> Self {
        Self {
            min_width,
            state: Self::classify(min_width, viewport_width),
        }
    }

    fn classify(min_width: f32, viewport_width: f32) -> ResponsiveState {
        if viewport_width > min_width {
            ResponsiveState::Active
        } else {
            ResponsiveState::Inactive
        }
    }

    /// Reclassifies after a resize and reports which edge was crossed.
    pub fn on_resize(&mut self, viewport_width: f32) -> ResponsiveTransition {
        let next = Self::classify(self.min_width, viewport_width);
        let transition = match (self.state, next) {
            (ResponsiveState::Inactive, ResponsiveState::Active) => ResponsiveTransition::Activated,
            (ResponsiveState::Active, ResponsiveState::Inactive) => {
                ResponsiveTransition::Deactivated
            }
            _ => ResponsiveTransition::Unchanged,
        };
        self.state = next;
        transition
    }

    pub fn state(&self) -> ResponsiveState {
        self.state
    }

    pub fn is_desktop(&self) -> bool {
        self.state == ResponsiveState::Active
    }
}
