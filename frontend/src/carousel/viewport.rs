use std::collections::BTreeSet;

use js_sys::Array;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

pub const INDEX_ATTRIBUTE: &str = "data-index";

/// Accumulates per-item intersection changes into the full set of items
/// currently on screen. The browser only reports items whose ratio crossed
/// the threshold, so the set has to be kept across callbacks.
#[derive(Clone, Debug)]
pub struct VisibilityTracker {
    threshold: f64,
    visible: BTreeSet<usize>,
}

impl VisibilityTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: BTreeSet::new(),
        }
    }

    /// Returns true when the visible set changed.
    pub fn record(&mut self, index: usize, ratio: f64, is_intersecting: bool) -> bool {
        if is_intersecting && ratio >= self.threshold {
            self.visible.insert(index)
        } else {
            self.visible.remove(&index)
        }
    }

    pub fn visible(&self) -> &BTreeSet<usize> {
        &self.visible
    }
}

pub fn parse_index(attribute: Option<String>) -> Option<usize> {
    attribute?.trim().parse().ok()
}

/// Watches every child of a scroll container and emits the visible index
/// set whenever it changes. Disconnects on drop.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn observe_children(
        container: &Element,
        threshold: f64,
        on_report: Callback<BTreeSet<usize>>,
    ) -> Result<Self, JsValue> {
        let mut tracker = VisibilityTracker::new(threshold);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let mut changed = false;
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let Some(index) = parse_index(entry.target().get_attribute(INDEX_ATTRIBUTE)) else {
                        warn!("observed carousel child without a {} attribute", INDEX_ATTRIBUTE);
                        continue;
                    };
                    changed |= tracker.record(index, entry.intersection_ratio(), entry.is_intersecting());
                }
                if changed {
                    on_report.emit(tracker.visible().clone());
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root(Some(container));
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let children = container.children();
        for i in 0..children.length() {
            if let Some(child) = children.item(i) {
                observer.observe(&child);
            }
        }
        debug!("observing {} carousel items", children.length());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        let mut tracker = VisibilityTracker::new(0.5);
        assert!(tracker.record(0, 0.5, true));
        assert!(!tracker.record(1, 0.49, true));
        assert_eq!(tracker.visible().iter().copied().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn items_leave_when_they_drop_below_threshold() {
        let mut tracker = VisibilityTracker::new(0.5);
        tracker.record(1, 1.0, true);
        tracker.record(2, 0.6, true);
        assert!(tracker.record(1, 0.2, true));
        assert!(tracker.record(2, 0.0, false));
        assert!(tracker.visible().is_empty());
    }

    #[test]
    fn repeated_entries_are_not_changes() {
        let mut tracker = VisibilityTracker::new(0.5);
        assert!(tracker.record(3, 0.9, true));
        assert!(!tracker.record(3, 1.0, true));
        assert!(!tracker.record(4, 0.0, false));
    }

    #[test]
    fn scrolling_across_two_items() {
        let mut tracker = VisibilityTracker::new(0.5);
        let mut reports = Vec::new();
        for (index, ratio) in [(1, 0.8), (2, 0.55), (1, 0.3)] {
            if tracker.record(index, ratio, ratio > 0.0) {
                reports.push(tracker.visible().iter().copied().collect::<Vec<_>>());
            }
        }
        assert_eq!(reports, vec![vec![1], vec![1, 2], vec![2]]);
    }

    #[test]
    fn index_attribute_parsing() {
        assert_eq!(parse_index(Some("4".to_string())), Some(4));
        assert_eq!(parse_index(Some(" 2 ".to_string())), Some(2));
        assert_eq!(parse_index(Some("-1".to_string())), None);
        assert_eq!(parse_index(Some("next".to_string())), None);
        assert_eq!(parse_index(None), None);
    }
}
