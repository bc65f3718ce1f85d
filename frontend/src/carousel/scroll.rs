use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::NodeRef;

/// Moves the carousel viewport. Fire-and-forget: callers never learn when
/// the scroll settles.
pub trait ScrollActuator {
    fn scroll_to_item(&self, index: usize);
}

/// Horizontal scroll position that puts an item flush with the container's
/// leading edge. Both offsets share the same offset parent.
pub fn leading_edge_offset(item_offset_left: i32, container_offset_left: i32) -> f64 {
    f64::from(item_offset_left - container_offset_left)
}

/// Smooth-scrolls the container behind a `NodeRef` to one of its children.
#[derive(Clone)]
pub struct ContainerScroller {
    container: NodeRef,
}

impl ContainerScroller {
    pub fn new(container: NodeRef) -> Self {
        Self { container }
    }
}

impl ScrollActuator for ContainerScroller {
    fn scroll_to_item(&self, index: usize) {
        let Some(container) = self.container.cast::<HtmlElement>() else {
            warn!("carousel container not mounted, dropping scroll to {}", index);
            return;
        };
        let target = u32::try_from(index)
            .ok()
            .and_then(|i| container.children().item(i))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let Some(target) = target else {
            warn!("no carousel item at index {}", index);
            return;
        };

        let options = ScrollToOptions::new();
        options.set_left(leading_edge_offset(target.offset_left(), container.offset_left()));
        options.set_behavior(ScrollBehavior::Smooth);
        container.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_relative_to_container() {
        assert_eq!(leading_edge_offset(824, 24), 800.0);
        assert_eq!(leading_edge_offset(24, 24), 0.0);
    }

    #[test]
    fn item_left_of_container_scrolls_negative() {
        // Browsers clamp this to zero themselves.
        assert_eq!(leading_edge_offset(0, 24), -24.0);
    }
}
