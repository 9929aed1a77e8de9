use crate::content::ProjectRecord;
use crate::motion::{stagger_delay, Transition};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPhase {
    Hidden,
    Shown,
    /// Fading out; removed once the exit with this generation has elapsed.
    Exiting { generation: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardEvent {
    PointerEnter,
    PointerLeave,
    ExitElapsed { generation: u32 },
}

/// Hover state owned by one project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardState {
    pub hovered: bool,
    pub overlay: OverlayPhase,
    generation: u32,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            hovered: false,
            overlay: OverlayPhase::Hidden,
            generation: 0,
        }
    }
}

impl CardState {
    pub fn apply(self, event: CardEvent) -> Self {
        match event {
            CardEvent::PointerEnter => Self {
                hovered: true,
                overlay: OverlayPhase::Shown,
                ..self
            },
            CardEvent::PointerLeave => match self.overlay {
                OverlayPhase::Shown => {
                    let generation = self.generation.wrapping_add(1);
                    Self {
                        hovered: false,
                        overlay: OverlayPhase::Exiting { generation },
                        generation,
                    }
                }
                _ => Self {
                    hovered: false,
                    ..self
                },
            },
            CardEvent::ExitElapsed { generation } => match self.overlay {
                OverlayPhase::Exiting { generation: current } if current == generation => Self {
                    overlay: OverlayPhase::Hidden,
                    ..self
                },
                _ => self,
            },
        }
    }

    pub fn overlay_mounted(&self) -> bool {
        !matches!(self.overlay, OverlayPhase::Hidden)
    }

    pub fn exiting_generation(&self) -> Option<u32> {
        match self.overlay {
            OverlayPhase::Exiting { generation } => Some(generation),
            _ => None,
        }
    }
}

/// Which links a card offers, derived from which links its record carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardAffordances<'a> {
    pub github: Option<&'a str>,
    pub visit: Option<&'a str>,
    pub overlay_visit: Option<&'a str>,
    pub preview_src: &'a str,
}

impl<'a> CardAffordances<'a> {
    pub fn for_record(record: &'a ProjectRecord) -> Self {
        Self {
            github: record.github_link,
            visit: record.link,
            overlay_visit: record.link,
            preview_src: record.link.unwrap_or_default(),
        }
    }
}

/// One grid cell of the project list with its entrance offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSlot {
    pub index: usize,
    pub record: &'static ProjectRecord,
    pub delay: f64,
}

pub fn grid_slots(records: &'static [ProjectRecord], grid: &Transition) -> Vec<GridSlot> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| GridSlot {
            index,
            record,
            delay: stagger_delay(grid, index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;
    use crate::motion::presets::PROJECTS_GRID;

    fn link_count(affordances: &CardAffordances<'_>) -> usize {
        [affordances.github, affordances.visit, affordances.overlay_visit]
            .iter()
            .flatten()
            .count()
    }

    const BARE: ProjectRecord = ProjectRecord {
        title: "X",
        description: "Y",
        link: None,
        github_link: None,
        tech_stack: &[],
    };

    #[test]
    fn enter_shows_overlay_and_repeats_are_idempotent() {
        let once = CardState::default().apply(CardEvent::PointerEnter);
        let twice = once.apply(CardEvent::PointerEnter);
        assert!(once.hovered);
        assert_eq!(once.overlay, OverlayPhase::Shown);
        assert_eq!(once, twice);
    }

    #[test]
    fn only_leave_clears_hover() {
        let hovered = CardState::default().apply(CardEvent::PointerEnter);
        let stale = hovered.apply(CardEvent::ExitElapsed { generation: 0 });
        assert!(stale.hovered);

        let left = hovered.apply(CardEvent::PointerLeave);
        assert!(!left.hovered);
        assert!(left.overlay_mounted());
        assert_eq!(left.apply(CardEvent::PointerLeave), left);
    }

    #[test]
    fn exit_removes_overlay_after_matching_timer() {
        let leaving = CardState::default()
            .apply(CardEvent::PointerEnter)
            .apply(CardEvent::PointerLeave);
        let generation = leaving.exiting_generation().expect("exit should be running");

        let gone = leaving.apply(CardEvent::ExitElapsed { generation });
        assert_eq!(gone.overlay, OverlayPhase::Hidden);
        assert!(!gone.overlay_mounted());
    }

    #[test]
    fn reentering_during_exit_ignores_old_timer() {
        let leaving = CardState::default()
            .apply(CardEvent::PointerEnter)
            .apply(CardEvent::PointerLeave);
        let old = leaving.exiting_generation().expect("exit should be running");

        let back = leaving.apply(CardEvent::PointerEnter);
        assert_eq!(back.apply(CardEvent::ExitElapsed { generation: old }), back);

        let again = back.apply(CardEvent::PointerLeave);
        assert_ne!(again.exiting_generation(), Some(old));
        assert_eq!(
            again.apply(CardEvent::ExitElapsed { generation: old }).overlay,
            again.overlay
        );
    }

    #[test]
    fn leave_without_enter_stays_hidden() {
        let state = CardState::default().apply(CardEvent::PointerLeave);
        assert_eq!(state, CardState::default());
    }

    #[test]
    fn record_without_links_offers_no_links() {
        let affordances = CardAffordances::for_record(&BARE);
        assert_eq!(link_count(&affordances), 0);
        assert_eq!(affordances.preview_src, "");
        assert!(BARE.tech_stack.is_empty());

        let hovered = CardState::default().apply(CardEvent::PointerEnter);
        assert!(hovered.overlay_mounted());
        assert_eq!(affordances.overlay_visit, None);
    }

    #[test]
    fn linked_record_offers_visit_but_no_github() {
        let property_pulse = &PROJECTS[1];
        let affordances = CardAffordances::for_record(property_pulse);
        assert_eq!(affordances.github, None);
        assert_eq!(affordances.visit, property_pulse.link);
        assert_eq!(affordances.overlay_visit, property_pulse.link);
        assert_eq!(affordances.preview_src, "https://property-pulse-tau-dusky.vercel.app/");
    }

    #[test]
    fn grid_has_one_slot_per_record_in_order() {
        let slots = grid_slots(PROJECTS, &PROJECTS_GRID.transition());
        assert_eq!(slots.len(), PROJECTS.len());

        for (slot, record) in slots.iter().zip(PROJECTS) {
            assert_eq!(slot.record.title, record.title);
        }
        assert!(slots.windows(2).all(|pair| pair[0].delay < pair[1].delay));
        assert_eq!(slots[0].delay, 0.0);
    }
}
