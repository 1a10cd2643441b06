use bevy::prelude::*;

use super::FocusTarget;

/// Marks an entity the pointer ray can resolve to a [`FocusTarget`].
///
/// With `includes_descendants` set, a hit on any descendant mesh counts as a hit on this
/// entity (rovers are built from many child meshes). Without it only the entity's own mesh
/// counts, so the planet body does not claim the rovers parked on it.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub struct HoverTarget {
    pub target:               FocusTarget,
    pub includes_descendants: bool,
}

/// Which candidates the pointer ray intersected this move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickHits {
    pub planet:        bool,
    pub legged_rover:  bool,
    pub wheeled_rover: bool,
}

impl PickHits {
    pub const fn record(&mut self, target: FocusTarget) {
        match target {
            FocusTarget::Planet => self.planet = true,
            FocusTarget::LeggedRover => self.legged_rover = true,
            FocusTarget::WheeledRover => self.wheeled_rover = true,
            FocusTarget::None => {},
        }
    }
}

/// Pre-focus pointer affordance. An enum rather than three flags, so at most one
/// candidate can be hovered at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum HoverState {
    #[default]
    Nothing,
    Planet,
    LeggedRover,
    WheeledRover,
}

impl HoverState {
    /// Fixed priority: planet body, then legged rover, then wheeled rover.
    pub const fn from_hits(hits: PickHits) -> Self {
        if hits.planet {
            Self::Planet
        } else if hits.legged_rover {
            Self::LeggedRover
        } else if hits.wheeled_rover {
            Self::WheeledRover
        } else {
            Self::Nothing
        }
    }

    pub const fn target(self) -> FocusTarget {
        match self {
            Self::Nothing => FocusTarget::None,
            Self::Planet => FocusTarget::Planet,
            Self::LeggedRover => FocusTarget::LeggedRover,
            Self::WheeledRover => FocusTarget::WheeledRover,
        }
    }

    pub const fn over_planet(self) -> bool { matches!(self, Self::Planet) }

    pub const fn over_legged_rover(self) -> bool { matches!(self, Self::LeggedRover) }

    pub const fn over_wheeled_rover(self) -> bool { matches!(self, Self::WheeledRover) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(planet: bool, legged_rover: bool, wheeled_rover: bool) -> PickHits {
        PickHits {
            planet,
            legged_rover,
            wheeled_rover,
        }
    }

    #[test]
    fn planet_wins_over_everything_behind_it() {
        assert_eq!(
            HoverState::from_hits(hits(true, true, true)),
            HoverState::Planet
        );
        assert_eq!(
            HoverState::from_hits(hits(true, false, true)),
            HoverState::Planet
        );
    }

    #[test]
    fn legged_rover_wins_over_wheeled_rover() {
        assert_eq!(
            HoverState::from_hits(hits(false, true, true)),
            HoverState::LeggedRover
        );
    }

    #[test]
    fn no_hits_hovers_nothing() {
        let hover = HoverState::from_hits(PickHits::default());
        assert_eq!(hover, HoverState::Nothing);
        assert_eq!(hover.target(), FocusTarget::None);
    }

    #[test]
    fn at_most_one_flag_is_set_for_any_hit_combination() {
        for bits in 0_u8..8 {
            let hover = HoverState::from_hits(hits(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0));
            let set = [
                hover.over_planet(),
                hover.over_legged_rover(),
                hover.over_wheeled_rover(),
            ]
            .into_iter()
            .filter(|flag| *flag)
            .count();

            assert_eq!(set, usize::from(bits != 0), "hits {bits:03b} -> {hover:?}");
        }
    }

    #[test]
    fn record_ignores_none() {
        let mut recorded = PickHits::default();
        recorded.record(FocusTarget::None);
        assert_eq!(recorded, PickHits::default());

        recorded.record(FocusTarget::WheeledRover);
        assert_eq!(recorded, hits(false, false, true));
    }
}
