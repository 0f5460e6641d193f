//! Pull-to-refresh wrapper: feeds container touch events into the
//! gesture state machine and renders the spinner indicator above its
//! children.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AddEventListenerOptions, HtmlElement, TouchEvent};
use yew::prelude::*;

use crate::api::ApiError;
use crate::state::{PullCommand, PullConfig, PullEvent, PullMachine};
use crate::util::cerror;

pub type RefreshFuture = Pin<Box<dyn Future<Output = Result<(), ApiError>>>>;

/// The caller-supplied refresh operation. Always settles from the
/// controller's point of view: the future resolves Ok or Err, and an
/// operation that fails eagerly is just an already-failed future.
#[derive(Clone)]
pub struct RefreshFn(Rc<dyn Fn() -> RefreshFuture>);

impl RefreshFn {
    pub fn new(f: impl Fn() -> RefreshFuture + 'static) -> Self {
        Self(Rc::new(f))
    }

    fn call(&self) -> RefreshFuture {
        (self.0)()
    }
}

impl PartialEq for RefreshFn {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PullToRefreshProps {
    pub on_refresh: RefreshFn,
    #[prop_or(crate::state::pull::DEFAULT_THRESHOLD)]
    pub threshold: f64,
    #[prop_or(true)]
    pub is_enabled: bool,
    #[prop_or_default]
    pub children: Html,
}

/// 360 while the refresh runs, otherwise a half-turn proportional to
/// how far the user has pulled.
pub fn indicator_rotation(pull_distance: f64, refreshing: bool, threshold: f64) -> f64 {
    if refreshing {
        360.0
    } else {
        ((pull_distance / threshold) * 180.0).min(180.0)
    }
}

/// Indicator appears once the pull is past 10px.
pub fn indicator_opacity(pull_distance: f64) -> f64 {
    if pull_distance > 10.0 { 1.0 } else { 0.0 }
}

/// True only when both the window and the monitored container are
/// scrolled to the very top.
fn at_top(container: &HtmlElement) -> bool {
    let window_y = web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0);
    window_y <= 0.0 && container.scroll_top() == 0
}

#[function_component(PullToRefresh)]
pub fn pull_to_refresh(props: &PullToRefreshProps) -> Html {
    let container_ref = use_node_ref();
    let pull_distance = use_state(|| 0.0f64);
    let is_refreshing = use_state(|| false);
    let threshold = props.threshold;
    let machine = use_mut_ref(PullMachine::default);

    {
        let container_ref = container_ref.clone();
        let machine = machine.clone();
        let pull_distance = pull_distance.clone();
        let is_refreshing = is_refreshing.clone();
        // Keyed on every prop the gesture depends on: a new refresh
        // operation, a toggled is_enabled or a changed threshold all
        // rebuild the machine and rebind (or drop) the listeners.
        use_effect_with(
            (props.on_refresh.clone(), props.is_enabled, threshold),
            move |(on_refresh, is_enabled, threshold)| {
                machine.borrow_mut().reconfigure(PullConfig {
                    threshold: *threshold,
                    is_enabled: *is_enabled,
                });
                pull_distance.set(0.0);
                is_refreshing.set(false);

                let mut cleanup: Option<Box<dyn FnOnce()>> = None;

                if *is_enabled && let Some(container) = container_ref.cast::<HtmlElement>() {
                    let start_cb = {
                        let machine = machine.clone();
                        let container = container.clone();
                        Closure::wrap(Box::new(move |e: TouchEvent| {
                            if let Some(t0) = e.touches().item(0) {
                                machine.borrow_mut().dispatch(PullEvent::TouchStart {
                                    y: t0.client_y() as f64,
                                    at_top: at_top(&container),
                                });
                            }
                        }) as Box<dyn FnMut(_)>)
                    };
                    container
                        .add_event_listener_with_callback(
                            "touchstart",
                            start_cb.as_ref().unchecked_ref(),
                        )
                        .ok();

                    let move_cb = {
                        let machine = machine.clone();
                        let container = container.clone();
                        let pull_distance = pull_distance.clone();
                        Closure::wrap(Box::new(move |e: TouchEvent| {
                            if let Some(t0) = e.touches().item(0) {
                                let cmd = machine.borrow_mut().dispatch(PullEvent::TouchMove {
                                    y: t0.client_y() as f64,
                                    at_top: at_top(&container),
                                });
                                if cmd == PullCommand::ClaimMove {
                                    e.prevent_default();
                                }
                                pull_distance.set(machine.borrow().pull_distance());
                            }
                        }) as Box<dyn FnMut(_)>)
                    };
                    // Non-passive so qualifying moves can suppress scrolling.
                    let move_opts = AddEventListenerOptions::new();
                    move_opts.set_passive(false);
                    container
                        .add_event_listener_with_callback_and_add_event_listener_options(
                            "touchmove",
                            move_cb.as_ref().unchecked_ref(),
                            &move_opts,
                        )
                        .ok();

                    let end_cb = {
                        let machine = machine.clone();
                        let pull_distance = pull_distance.clone();
                        let is_refreshing = is_refreshing.clone();
                        let on_refresh = on_refresh.clone();
                        Closure::wrap(Box::new(move |_e: TouchEvent| {
                            let cmd = machine.borrow_mut().dispatch(PullEvent::TouchEnd);
                            pull_distance.set(0.0);
                            if cmd == PullCommand::BeginRefresh {
                                is_refreshing.set(true);
                                let fut = on_refresh.call();
                                let machine = machine.clone();
                                let is_refreshing = is_refreshing.clone();
                                spawn_local(async move {
                                    // Failures are the caller's to surface;
                                    // the gesture re-arms either way.
                                    if let Err(err) = fut.await {
                                        cerror(&format!("refresh failed: {err}"));
                                    }
                                    machine.borrow_mut().dispatch(PullEvent::RefreshSettled);
                                    is_refreshing.set(false);
                                });
                            }
                        }) as Box<dyn FnMut(_)>)
                    };
                    container
                        .add_event_listener_with_callback("touchend", end_cb.as_ref().unchecked_ref())
                        .ok();

                    cleanup = Some(Box::new(move || {
                        let _ = container.remove_event_listener_with_callback(
                            "touchstart",
                            start_cb.as_ref().unchecked_ref(),
                        );
                        let _ = container.remove_event_listener_with_callback(
                            "touchmove",
                            move_cb.as_ref().unchecked_ref(),
                        );
                        let _ = container.remove_event_listener_with_callback(
                            "touchend",
                            end_cb.as_ref().unchecked_ref(),
                        );
                        let _keep_alive = (&start_cb, &move_cb, &end_cb);
                    }));
                }

                move || {
                    if let Some(f) = cleanup {
                        f();
                    }
                }
            },
        );
    }

    let rotation = indicator_rotation(*pull_distance, *is_refreshing, threshold);
    let opacity = indicator_opacity(*pull_distance);
    let top = (*pull_distance - 40.0).max(0.0);

    html! {
        <div ref={container_ref} style="position:relative;">
            <div style={format!(
                "position:absolute; left:50%; transform:translateX(-50%); top:{top}px; \
                 opacity:{opacity}; transition:all 0.2s ease-out; pointer-events:none; z-index:10;"
            )}>
                <div style={format!(
                    "width:32px; height:32px; border-radius:50%; border:3px solid #d0d7de; \
                     border-top-color:#111; transform:rotate({rotation}deg); transition:transform 0.15s linear;"
                )}></div>
            </div>
            { props.children.clone() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_is_proportional_then_capped() {
        assert_eq!(indicator_rotation(0.0, false, 80.0), 0.0);
        assert_eq!(indicator_rotation(40.0, false, 80.0), 90.0);
        assert_eq!(indicator_rotation(80.0, false, 80.0), 180.0);
        assert_eq!(indicator_rotation(120.0, false, 80.0), 180.0);
    }

    #[test]
    fn rotation_pins_to_full_turn_while_refreshing() {
        assert_eq!(indicator_rotation(0.0, true, 80.0), 360.0);
        assert_eq!(indicator_rotation(55.0, true, 80.0), 360.0);
    }

    #[test]
    fn opacity_switches_past_ten_pixels() {
        assert_eq!(indicator_opacity(0.0), 0.0);
        assert_eq!(indicator_opacity(10.0), 0.0);
        assert_eq!(indicator_opacity(10.5), 1.0);
        assert_eq!(indicator_opacity(120.0), 1.0);
    }
}
