//! Focus selection: which scene object the camera is framing.
//!
//! Each trigger toggles its own target. Requesting the active target drops back to
//! [`FocusTarget::None`], requesting any other target switches to it directly.

use bevy::prelude::*;

/// The scene object the camera is currently framing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
pub enum FocusTarget {
    #[default]
    None,
    Planet,
    LeggedRover,
    WheeledRover,
}

impl FocusTarget {
    /// Every target that can be focused, in hover priority order.
    pub const SELECTABLE: [Self; 3] = [Self::Planet, Self::LeggedRover, Self::WheeledRover];

    pub const fn is_none(self) -> bool { matches!(self, Self::None) }

    /// The planet keeps its own spin unless a rover is framed.
    pub const fn planet_spins(self) -> bool { matches!(self, Self::None | Self::Planet) }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Home",
            Self::Planet => "Mars",
            Self::LeggedRover => "Quadruped",
            Self::WheeledRover => "Speedy",
        }
    }
}

/// Requests coming from the nav bar and keyboard shortcuts, applied in arrival order.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRequest {
    Toggle(FocusTarget),
    Home,
}

/// What the info panel should do in response to a focus transition (or the close button).
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoPanelCommand {
    Show(FocusTarget),
    Hide,
}

/// Outcome of a single focus transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTransition {
    pub from:        FocusTarget,
    pub to:          FocusTarget,
    pub planet_spin: bool,
}

impl FocusTransition {
    pub const fn panel_command(&self) -> InfoPanelCommand {
        if self.to.is_none() {
            InfoPanelCommand::Hide
        } else {
            InfoPanelCommand::Show(self.to)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    target:      FocusTarget,
    planet_spin: bool,
}

impl Default for Focus {
    fn default() -> Self {
        Self {
            target:      FocusTarget::None,
            planet_spin: FocusTarget::None.planet_spins(),
        }
    }
}

impl Focus {
    pub const fn target(&self) -> FocusTarget { self.target }

    pub const fn planet_spin_enabled(&self) -> bool { self.planet_spin }

    pub fn toggle(&mut self, requested: FocusTarget) -> FocusTransition {
        let next = if self.target == requested {
            FocusTarget::None
        } else {
            requested
        };
        self.enter(next)
    }

    /// Forces [`FocusTarget::None`], regardless of the current target.
    pub fn clear(&mut self) -> FocusTransition { self.enter(FocusTarget::None) }

    fn enter(&mut self, to: FocusTarget) -> FocusTransition {
        let from = self.target;
        self.target = to;
        self.planet_spin = to.planet_spins();
        FocusTransition {
            from,
            to,
            planet_spin: self.planet_spin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unfocused_with_planet_spinning() {
        let focus = Focus::default();
        assert_eq!(focus.target(), FocusTarget::None);
        assert!(focus.planet_spin_enabled());
    }

    #[test]
    fn toggling_the_same_target_twice_returns_to_none() {
        for target in FocusTarget::SELECTABLE {
            let mut focus = Focus::default();

            let first = focus.toggle(target);
            assert_eq!(first.to, target);
            assert_eq!(first.panel_command(), InfoPanelCommand::Show(target));

            let second = focus.toggle(target);
            assert_eq!(second.from, target);
            assert_eq!(second.to, FocusTarget::None);
            assert_eq!(second.panel_command(), InfoPanelCommand::Hide);
            assert!(focus.planet_spin_enabled());
        }
    }

    #[test]
    fn switching_targets_overrides_directly() {
        let mut focus = Focus::default();
        focus.toggle(FocusTarget::Planet);

        let transition = focus.toggle(FocusTarget::WheeledRover);

        assert_eq!(transition.from, FocusTarget::Planet);
        assert_eq!(transition.to, FocusTarget::WheeledRover);
        assert_eq!(
            transition.panel_command(),
            InfoPanelCommand::Show(FocusTarget::WheeledRover)
        );
    }

    #[test]
    fn planet_spin_freezes_only_for_rovers() {
        let mut focus = Focus::default();

        assert!(focus.toggle(FocusTarget::Planet).planet_spin);
        assert!(!focus.toggle(FocusTarget::LeggedRover).planet_spin);
        assert!(!focus.toggle(FocusTarget::WheeledRover).planet_spin);
        assert!(focus.toggle(FocusTarget::WheeledRover).planet_spin);
    }

    #[test]
    fn clear_from_any_target_hides_the_panel() {
        for target in FocusTarget::SELECTABLE {
            let mut focus = Focus::default();
            focus.toggle(target);

            let transition = focus.clear();

            assert_eq!(transition.to, FocusTarget::None);
            assert_eq!(transition.panel_command(), InfoPanelCommand::Hide);
            assert!(transition.planet_spin);
        }
    }
}
