use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::icons::CloseIcon;

const EXIT_MS: u32 = 200; // fade-out before unmount

#[derive(Properties, PartialEq)]
pub struct LightboxOverlayProps {
    pub image: Option<AttrValue>,
    pub on_close: Callback<()>,
}

#[function_component(LightboxOverlay)]
pub fn lightbox_overlay(props: &LightboxOverlayProps) -> Html {
    let shown = use_state(|| props.image.clone());
    let leaving = use_state(|| false);

    {
        let shown = shown.clone();
        let leaving = leaving.clone();
        use_effect_with_deps(
            move |image: &Option<AttrValue>| {
                let mut exit_timer = None;
                match image {
                    Some(url) => {
                        shown.set(Some(url.clone()));
                        leaving.set(false);
                    }
                    None if shown.is_some() => {
                        leaving.set(true);
                        exit_timer = Some(Timeout::new(EXIT_MS, move || {
                            shown.set(None);
                            leaving.set(false);
                        }));
                    }
                    None => {}
                }
                // Dropping the timer cancels a fade that a reopen interrupted
                move || drop(exit_timer)
            },
            props.image.clone(),
        );
    }

    let Some(url) = (*shown).clone() else {
        return html! {};
    };

    let close_on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let close_on_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            class={classes!("lightbox", (*leaving).then(|| "leaving"))}
            onclick={close_on_backdrop}
        >
            <button
                type="button"
                class="lightbox-close"
                aria-label="Close"
                onclick={close_on_button}
            >
                <CloseIcon size={24} />
            </button>
            <img class="lightbox-image" src={url} alt="Fullscreen" onclick={keep_open} />
            <style>
                {r#"
                .lightbox {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.95);
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    animation: fade-in 0.2s ease-out;
                }
                .lightbox.leaving {
                    animation: fade-out 0.2s ease-in forwards;
                    pointer-events: none;
                }
                .lightbox-close {
                    position: absolute;
                    top: 18px;
                    right: 18px;
                    border: 2px solid #404040;
                    background: transparent;
                    color: #fff;
                    padding: 10px;
                    cursor: pointer;
                    display: grid;
                    place-items: center;
                }
                .lightbox-image {
                    max-width: 90vw;
                    max-height: 90vh;
                    object-fit: contain;
                    animation: settle-in 0.2s ease-out;
                }
                .lightbox.leaving .lightbox-image {
                    transform: scale(0.98);
                    transition: transform 0.2s ease-in;
                }
                "#}
            </style>
        </div>
    }
}
