use std::collections::BTreeSet;

use log::debug;

use super::scroll::ScrollActuator;

/// How a prev/next button should be rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlState {
    Hidden,
    Disabled,
    Enabled,
}

/// Keeps the active testimonial in sync between explicit navigation and
/// whatever the viewport observer says is on screen.
///
/// `active_index < item_count` holds whenever `item_count > 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselController {
    active_index: usize,
    item_count: usize,
    is_loading: bool,
}

impl Default for CarouselController {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselController {
    pub fn new() -> Self {
        Self {
            active_index: 0,
            item_count: 0,
            is_loading: true,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Called when the item provider delivers its list.
    pub fn resolve(&mut self, item_count: usize) {
        self.is_loading = false;
        self.item_count = item_count;
        // A replacement list may be shorter than the one we paginated through.
        if item_count == 0 {
            self.active_index = 0;
        } else if self.active_index >= item_count {
            self.active_index = item_count - 1;
        }
    }

    pub fn go_to(&mut self, index: usize, actuator: &impl ScrollActuator) {
        if self.item_count == 0 {
            return;
        }
        let target = index.min(self.item_count - 1);
        debug!("carousel go_to({}) -> {}", index, target);
        self.active_index = target;
        actuator.scroll_to_item(target);
    }

    pub fn prev(&mut self, actuator: &impl ScrollActuator) {
        self.go_to(self.active_index.saturating_sub(1), actuator);
    }

    pub fn next(&mut self, actuator: &impl ScrollActuator) {
        self.go_to(self.active_index.saturating_add(1), actuator);
    }

    /// Adopts the leftmost visible item as active. Returns whether the
    /// active index changed.
    pub fn on_visibility_report(&mut self, visible: &BTreeSet<usize>) -> bool {
        let Some(&first) = visible.iter().find(|&&i| i < self.item_count) else {
            return false;
        };
        debug!("carousel visible {:?} -> active {}", visible, first);
        let changed = first != self.active_index;
        self.active_index = first;
        changed
    }

    pub fn page_indicator_state(&self) -> Vec<bool> {
        (0..self.item_count).map(|i| i == self.active_index).collect()
    }

    fn navigation_visible(&self) -> bool {
        !self.is_loading && self.item_count > 1
    }

    pub fn prev_control(&self) -> ControlState {
        if !self.navigation_visible() {
            ControlState::Hidden
        } else if self.active_index == 0 {
            ControlState::Disabled
        } else {
            ControlState::Enabled
        }
    }

    pub fn next_control(&self) -> ControlState {
        if !self.navigation_visible() {
            ControlState::Hidden
        } else if self.active_index == self.item_count - 1 {
            ControlState::Disabled
        } else {
            ControlState::Enabled
        }
    }

    /// Dots share the visibility rule of the arrow buttons.
    pub fn shows_page_indicator(&self) -> bool {
        self.navigation_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingActuator {
        requests: RefCell<Vec<usize>>,
    }

    impl ScrollActuator for RecordingActuator {
        fn scroll_to_item(&self, index: usize) {
            self.requests.borrow_mut().push(index);
        }
    }

    fn loaded(count: usize) -> CarouselController {
        let mut controller = CarouselController::new();
        controller.resolve(count);
        controller
    }

    fn set(indices: &[usize]) -> BTreeSet<usize> {
        indices.iter().copied().collect()
    }

    #[test]
    fn starts_loading_and_empty() {
        let controller = CarouselController::new();
        assert!(controller.is_loading());
        assert_eq!(controller.item_count(), 0);
        assert_eq!(controller.active_index(), 0);
        assert_eq!(controller.prev_control(), ControlState::Hidden);
        assert_eq!(controller.next_control(), ControlState::Hidden);
        assert!(controller.page_indicator_state().is_empty());
    }

    #[test]
    fn go_to_clamps_into_range() {
        for count in 1..6 {
            for requested in 0..10 {
                let actuator = RecordingActuator::default();
                let mut controller = loaded(count);
                controller.go_to(requested, &actuator);
                let expected = requested.min(count - 1);
                assert_eq!(controller.active_index(), expected);
                assert_eq!(*actuator.requests.borrow(), vec![expected]);
            }
        }
    }

    #[test]
    fn go_to_on_empty_list_does_nothing() {
        let actuator = RecordingActuator::default();
        let mut controller = loaded(0);
        controller.go_to(3, &actuator);
        controller.next(&actuator);
        controller.prev(&actuator);
        assert_eq!(controller.active_index(), 0);
        assert!(actuator.requests.borrow().is_empty());
    }

    #[test]
    fn prev_at_first_item_stays_put() {
        let actuator = RecordingActuator::default();
        let mut controller = loaded(4);
        controller.prev(&actuator);
        assert_eq!(controller.active_index(), 0);
        // The scroll request still goes out; it is harmless at the edge.
        assert_eq!(*actuator.requests.borrow(), vec![0]);
    }

    #[test]
    fn next_at_last_item_stays_put() {
        let actuator = RecordingActuator::default();
        let mut controller = loaded(4);
        controller.go_to(3, &actuator);
        controller.next(&actuator);
        assert_eq!(controller.active_index(), 3);
    }

    #[test]
    fn go_to_usize_max_clamps() {
        let actuator = RecordingActuator::default();
        let mut controller = loaded(2);
        controller.go_to(usize::MAX, &actuator);
        controller.next(&actuator);
        assert_eq!(controller.active_index(), 1);
    }

    #[test]
    fn empty_visibility_report_keeps_active_index() {
        let actuator = RecordingActuator::default();
        let mut controller = loaded(5);
        controller.go_to(3, &actuator);
        assert!(!controller.on_visibility_report(&BTreeSet::new()));
        assert_eq!(controller.active_index(), 3);
    }

    #[test]
    fn visibility_report_prefers_smallest_index() {
        for start in 0..5 {
            let actuator = RecordingActuator::default();
            let mut controller = loaded(5);
            controller.go_to(start, &actuator);
            controller.on_visibility_report(&set(&[3, 2]));
            assert_eq!(controller.active_index(), 2);
        }
    }

    #[test]
    fn visibility_report_ignores_stale_indices() {
        let mut controller = loaded(2);
        assert!(!controller.on_visibility_report(&set(&[4, 7])));
        assert_eq!(controller.active_index(), 0);
        assert!(controller.on_visibility_report(&set(&[1, 4])));
        assert_eq!(controller.active_index(), 1);
    }

    #[test]
    fn visibility_report_does_not_scroll() {
        let actuator = RecordingActuator::default();
        let mut controller = loaded(5);
        controller.on_visibility_report(&set(&[4]));
        assert!(actuator.requests.borrow().is_empty());
    }

    #[test]
    fn manual_scroll_sequence() {
        let mut controller = loaded(5);
        let mut seen = Vec::new();
        for report in [set(&[1]), set(&[1, 2]), set(&[2])] {
            controller.on_visibility_report(&report);
            seen.push(controller.active_index());
        }
        assert_eq!(seen, vec![1, 1, 2]);
    }

    #[test]
    fn page_indicator_marks_only_active() {
        let actuator = RecordingActuator::default();
        let mut controller = loaded(4);
        controller.go_to(2, &actuator);
        assert_eq!(
            controller.page_indicator_state(),
            vec![false, false, true, false]
        );
    }

    #[test]
    fn single_item_hides_navigation() {
        let controller = loaded(1);
        assert_eq!(controller.prev_control(), ControlState::Hidden);
        assert_eq!(controller.next_control(), ControlState::Hidden);
        assert!(!controller.shows_page_indicator());
    }

    #[test]
    fn three_items_walk_to_the_end() {
        let actuator = RecordingActuator::default();
        let mut controller = CarouselController::new();
        controller.resolve(3);
        assert!(!controller.is_loading());
        assert_eq!(controller.item_count(), 3);
        assert_eq!(controller.active_index(), 0);
        assert_eq!(controller.prev_control(), ControlState::Disabled);
        assert_eq!(controller.next_control(), ControlState::Enabled);

        controller.next(&actuator);
        controller.next(&actuator);
        assert_eq!(controller.active_index(), 2);
        assert_eq!(controller.next_control(), ControlState::Disabled);
        assert_eq!(controller.prev_control(), ControlState::Enabled);

        controller.next(&actuator);
        assert_eq!(controller.active_index(), 2);
        assert_eq!(*actuator.requests.borrow(), vec![1, 2, 2]);
    }

    #[test]
    fn last_event_wins_between_navigation_and_visibility() {
        let actuator = RecordingActuator::default();
        let mut controller = loaded(5);
        controller.go_to(4, &actuator);
        controller.on_visibility_report(&set(&[2, 3]));
        assert_eq!(controller.active_index(), 2);
        controller.go_to(1, &actuator);
        assert_eq!(controller.active_index(), 1);
    }

    #[test]
    fn shorter_replacement_list_clamps_active_index() {
        let actuator = RecordingActuator::default();
        let mut controller = loaded(5);
        controller.go_to(4, &actuator);
        controller.resolve(2);
        assert_eq!(controller.active_index(), 1);
        controller.resolve(0);
        assert_eq!(controller.active_index(), 0);
        assert_eq!(controller.next_control(), ControlState::Hidden);
    }
}
