use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

const MAX_TILT_DEG: f64 = 10.0;

/// Rotation (around x, around y) in degrees for a pointer inside a box of
/// `span` pixels. Top edge tilts towards the viewer, left edge away.
pub fn tilt_angles(pointer: (f64, f64), span: (f64, f64), max_deg: f64) -> (f64, f64) {
    let fraction = |value: f64, extent: f64| {
        if extent <= 0.0 {
            0.5
        } else {
            (value / extent).clamp(0.0, 1.0)
        }
    };
    let rotate_x = max_deg - 2.0 * max_deg * fraction(pointer.1, span.1);
    let rotate_y = -max_deg + 2.0 * max_deg * fraction(pointer.0, span.0);
    (rotate_x, rotate_y)
}

fn pointer_in_target(e: &MouseEvent) -> Option<(f64, f64)> {
    let target = e.current_target()?.dyn_into::<Element>().ok()?;
    let rect = target.get_bounding_client_rect();
    Some((f64::from(e.client_x()) - rect.left(), f64::from(e.client_y()) - rect.top()))
}

#[derive(Properties, PartialEq)]
pub struct TiltSurfaceProps {
    /// Pointer travel that maps onto the full tilt range.
    pub span: (f64, f64),
    #[prop_or_default]
    pub class: Classes,
    /// Radius of the highlight that follows the pointer.
    #[prop_or(250)]
    pub glow_radius: u32,
    pub children: Children,
}

/// Container that leans towards the pointer and lights up under it.
#[function_component(TiltSurface)]
pub fn tilt_surface(props: &TiltSurfaceProps) -> Html {
    let pointer = use_state(|| None::<(f64, f64)>);

    let onmousemove = {
        let pointer = pointer.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(position) = pointer_in_target(&e) {
                pointer.set(Some(position));
            }
        })
    };

    let onmouseleave = {
        let pointer = pointer.clone();
        Callback::from(move |_: MouseEvent| pointer.set(None))
    };

    let (x, y) = (*pointer).unwrap_or((props.span.0 / 2.0, props.span.1 / 2.0));
    let (rotate_x, rotate_y) = tilt_angles((x, y), props.span, MAX_TILT_DEG);
    let style = format!(
        "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg); --glow-x: {:.0}px; --glow-y: {:.0}px; --glow-radius: {}px;",
        rotate_x, rotate_y, x, y, props.glow_radius
    );

    html! {
        <div class={classes!("tilt-surface", props.class.clone())} {style} {onmousemove} {onmouseleave}>
            <div class="tilt-glow"></div>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_flat() {
        assert_eq!(tilt_angles((200.0, 150.0), (400.0, 300.0), 10.0), (0.0, 0.0));
    }

    #[test]
    fn corners_hit_the_limits() {
        assert_eq!(tilt_angles((0.0, 0.0), (400.0, 300.0), 10.0), (10.0, -10.0));
        assert_eq!(tilt_angles((400.0, 300.0), (400.0, 300.0), 10.0), (-10.0, 10.0));
    }

    #[test]
    fn pointer_outside_the_span_is_clamped() {
        assert_eq!(tilt_angles((-50.0, 900.0), (800.0, 400.0), 10.0), (-10.0, -10.0));
    }

    #[test]
    fn zero_span_stays_flat() {
        assert_eq!(tilt_angles((30.0, 30.0), (0.0, 0.0), 10.0), (0.0, 0.0));
    }
}
