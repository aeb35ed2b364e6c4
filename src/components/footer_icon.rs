use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::motion::magnet::Magnet;
use crate::motion::{Rect, Vec2};

#[derive(Clone, PartialEq)]
pub enum IconAction {
    Link(AttrValue),
    Click(Callback<()>),
}

#[derive(Properties, PartialEq)]
pub struct FooterIconProps {
    pub label: AttrValue,
    pub action: IconAction,
    pub children: Children,
}

#[derive(Clone)]
struct FrameLoop {
    magnet: Rc<RefCell<Magnet>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    last_timestamp: Rc<RefCell<Option<f64>>>,
    target: NodeRef,
}

impl FrameLoop {
    fn ensure_running(&self) {
        if self.frame.borrow().is_some() {
            return;
        }
        *self.last_timestamp.borrow_mut() = None;
        self.schedule();
    }

    fn schedule(&self) {
        let this = self.clone();
        let handle = request_animation_frame(move |timestamp| this.on_frame(timestamp));
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(&self, timestamp: f64) {
        self.frame.borrow_mut().take();

        let previous = self.last_timestamp.borrow_mut().replace(timestamp);
        let dt = match previous {
            Some(previous) => (timestamp - previous) / 1000.0,
            None => 1.0 / 60.0,
        };

        let moving = self.magnet.borrow_mut().tick(dt);
        self.paint();
        if moving {
            self.schedule();
        }
    }

    fn paint(&self) {
        let Some(element) = self.target.cast::<Element>() else {
            return;
        };
        let offset = self.magnet.borrow().rendered();
        let _ = element.set_attribute(
            "style",
            &format!("transform: translate({:.2}px, {:.2}px);", offset.x, offset.y),
        );
    }

    fn stop(&self) {
        self.frame.borrow_mut().take();
    }
}

fn client_rect(node: &NodeRef) -> Option<Rect> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some(Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

#[function_component(FooterIcon)]
pub fn footer_icon(props: &FooterIconProps) -> Html {
    let force_update = use_force_update();
    let shell_ref = use_node_ref();
    let outer_ref = use_node_ref();
    let magnet = use_mut_ref(Magnet::default);
    let frame = use_mut_ref(|| None::<AnimationFrame>);
    let last_timestamp = use_mut_ref(|| None::<f64>);

    let frame_loop = FrameLoop {
        magnet: magnet.clone(),
        frame,
        last_timestamp,
        target: outer_ref.clone(),
    };

    {
        let frame_loop = frame_loop.clone();
        use_effect_with_deps(move |_| move || frame_loop.stop(), ());
    }

    let onmouseenter = {
        let force_update = force_update.clone();
        let magnet = magnet.clone();
        Callback::from(move |_: MouseEvent| {
            magnet.borrow_mut().pointer_enter();
            force_update.force_update();
        })
    };

    let onmousemove = {
        let frame_loop = frame_loop.clone();
        let shell_ref = shell_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let pointer = Vec2::new(e.client_x() as f64, e.client_y() as f64);
            frame_loop
                .magnet
                .borrow_mut()
                .pointer_move(pointer, client_rect(&shell_ref));
            frame_loop.ensure_running();
        })
    };

    let onmouseleave = {
        Callback::from(move |_: MouseEvent| {
            frame_loop.magnet.borrow_mut().pointer_leave();
            force_update.force_update();
            frame_loop.ensure_running();
        })
    };

    let hovered = magnet.borrow().is_hovered();
    let label = props.label.clone();

    let shell = html! {
        <div
            ref={shell_ref}
            class="footer-icon-shell"
            {onmouseenter}
            {onmousemove}
            {onmouseleave}
        >
            {
                if hovered {
                    html! {
                        <div class="footer-icon-tooltip">
                            <span>{label.clone()}</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="footer-icon-glyph">
                <div class="footer-icon-glitch">{ for props.children.iter() }</div>
                <div class="footer-icon-face">{ for props.children.iter() }</div>
                {
                    if hovered {
                        html! { <div class="footer-icon-strobe" aria-hidden="true"></div> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    };

    let body = match &props.action {
        IconAction::Link(href) => html! {
            <a
                ref={outer_ref}
                class="footer-icon"
                href={href.clone()}
                target="_blank"
                rel="noopener noreferrer"
                aria-label={label}
            >
                { shell }
            </a>
        },
        IconAction::Click(on_click) => {
            let onclick = {
                let on_click = on_click.clone();
                Callback::from(move |_: MouseEvent| on_click.emit(()))
            };
            html! {
                <button
                    ref={outer_ref}
                    type="button"
                    class="footer-icon footer-icon-button"
                    aria-label={label}
                    {onclick}
                >
                    { shell }
                </button>
            }
        }
    };

    html! {
        <>
            { body }
            <style>
                {r#"
                .footer-icon {
                    position: relative;
                    display: inline-block;
                    color: inherit;
                }
                .footer-icon-button {
                    background: transparent;
                    border: 0;
                    padding: 0;
                }
                .footer-icon-shell {
                    width: 74px;
                    height: 74px;
                    border: 2px solid #404040;
                    background: rgba(0, 0, 0, 0.45);
                    backdrop-filter: blur(6px);
                    display: grid;
                    place-items: center;
                    position: relative;
                    cursor: pointer;
                    transition: transform 0.18s cubic-bezier(0.34, 1.56, 0.64, 1);
                }
                .footer-icon-shell:hover {
                    transform: translateY(-3px);
                }
                .footer-icon-tooltip {
                    pointer-events: none;
                    position: absolute;
                    top: -44px;
                    left: 50%;
                    transform: translateX(-50%);
                    white-space: nowrap;
                    font-size: 10px;
                    letter-spacing: 0.32em;
                    text-transform: uppercase;
                    color: #e5e5e5;
                    animation: tooltip-in 0.12s ease-out;
                }
                .footer-icon-tooltip span {
                    padding: 6px 10px;
                    border: 1px solid #404040;
                    background: rgba(0, 0, 0, 0.85);
                }
                .footer-icon-glyph {
                    position: relative;
                    display: grid;
                    place-items: center;
                    transition: transform 0.2s cubic-bezier(0.34, 1.56, 0.64, 1);
                }
                .footer-icon-shell:hover .footer-icon-glyph {
                    transform: scale(1.12) rotate(-2deg);
                }
                .footer-icon-shell:active .footer-icon-glyph {
                    transform: scale(0.98);
                }
                .footer-icon-glitch {
                    position: absolute;
                    inset: 0;
                    transform: translate(2px, -1px);
                    opacity: 0.3;
                    color: #ef4444;
                    filter: blur(0.3px);
                    display: grid;
                    place-items: center;
                }
                .footer-icon-face {
                    position: relative;
                }
                .footer-icon-strobe {
                    pointer-events: none;
                    position: absolute;
                    inset: -10px;
                    background: #fff;
                    mix-blend-mode: overlay;
                    opacity: 0;
                    animation: micro-strobe 0.55s linear;
                }
                "#}
            </style>
        </>
    }
}
