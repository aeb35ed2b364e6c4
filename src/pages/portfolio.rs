use log::info;
use web_sys::{window, Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::catalog;
use crate::components::footer_icon::{FooterIcon, IconAction};
use crate::components::gallery_grid::GalleryGrid;
use crate::components::icons::{InstagramIcon, MailIcon};
use crate::components::lightbox::LightboxOverlay;
use crate::components::switcher::Switcher;
use crate::config;
use crate::motion::parallax::parallax_offset;
use crate::motion::Vec2;
use crate::view_state::{ViewAction, ViewState};

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let view = use_reducer(ViewState::default);
    let grid_ref = use_node_ref();
    let (viewport_width, viewport_height) = use_window_size();

    {
        use_effect_with_deps(
            move |_| {
                info!("Portfolio mounted");
                || ()
            },
            (),
        );
    }

    // Writes the grid transform straight to the DOM so pointer moves don't
    // re-render the gallery.
    let onmousemove = {
        let grid_ref = grid_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let pointer = Vec2::new(e.client_x() as f64, e.client_y() as f64);
            let Some(offset) = parallax_offset(pointer, viewport_width, viewport_height) else {
                return;
            };
            if let Some(grid) = grid_ref.cast::<Element>() {
                let _ = grid.set_attribute(
                    "style",
                    &format!("transform: translate({:.2}px, {:.2}px);", offset.x, offset.y),
                );
            }
        })
    };

    let on_select = {
        let view = view.clone();
        Callback::from(move |key: AttrValue| view.dispatch(ViewAction::SelectCollection(key)))
    };

    let on_open = {
        let view = view.clone();
        Callback::from(move |url: AttrValue| view.dispatch(ViewAction::OpenImage(url)))
    };

    let on_close = {
        let view = view.clone();
        Callback::from(move |_: ()| view.dispatch(ViewAction::CloseImage))
    };

    let on_email = Callback::from(|_: ()| {
        if let Some(window) = window() {
            let _ = window.location().set_href(&config::email_href());
        }
    });

    html! {
        <div class="portfolio" {onmousemove}>
            <div ref={grid_ref} class="parallax-layer">
                <div class="parallax-grid"></div>
            </div>

            <section class="hero">
                <h1>{config::SITE_TITLE}</h1>
                <div class="hero-tagline">{config::TAGLINE}</div>
                <div class="hero-subtagline">{config::SUBTAGLINE}</div>
            </section>

            <Switcher
                collections={catalog::collections()}
                active_key={view.active_collection_key.clone()}
                {on_select}
            />

            {
                if let Some(collection) = view.active_collection() {
                    html! { <GalleryGrid {collection} {on_open} /> }
                } else {
                    html! {}
                }
            }

            <LightboxOverlay image={view.active_image().cloned()} {on_close} />

            <a class="booking-cta" href={config::booking_href()}>
                {"Booking / Contact"}
            </a>

            <footer class="site-footer">
                <div class="footer-icons">
                    <FooterIcon
                        label="Instagram"
                        action={IconAction::Link(AttrValue::Static(config::INSTAGRAM_URL))}
                    >
                        <InstagramIcon />
                    </FooterIcon>
                    <FooterIcon label="Email" action={IconAction::Click(on_email)}>
                        <MailIcon />
                    </FooterIcon>
                </div>
                <div class="footer-credit">{config::CREDIT}</div>
            </footer>

            <style>
                {r#"
                .portfolio {
                    min-height: 100vh;
                    background: #0a0a0a;
                    color: #f5f5f5;
                    font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace;
                    border: 10px solid #262626;
                    position: relative;
                    overflow: hidden;
                }
                .parallax-layer {
                    position: absolute;
                    inset: 0;
                    opacity: 0.09;
                    mix-blend-mode: screen;
                    pointer-events: none;
                    will-change: transform;
                }
                .parallax-grid {
                    width: 100%;
                    height: 100%;
                    background-image:
                        linear-gradient(to right, rgba(255, 0, 0, 0.12) 1px, transparent 1px),
                        linear-gradient(to bottom, rgba(255, 0, 0, 0.12) 1px, transparent 1px);
                    background-size: 70px 70px;
                }
                .hero {
                    min-height: 72vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    padding: 80px 24px 64px;
                    position: relative;
                }
                .hero h1 {
                    font-size: clamp(44px, 9vw, 96px);
                    font-weight: 900;
                    letter-spacing: -0.08em;
                    text-transform: uppercase;
                    margin: 0;
                }
                .hero-tagline {
                    opacity: 0.7;
                    margin-top: 18px;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    font-size: 12px;
                }
                .hero-subtagline {
                    opacity: 0.85;
                    margin-top: 10px;
                    letter-spacing: 0.28em;
                    text-transform: uppercase;
                    font-size: 11px;
                }
                .booking-cta {
                    position: fixed;
                    right: 18px;
                    bottom: 18px;
                    z-index: 60;
                    padding: 12px 14px;
                    border: 2px solid #ef4444;
                    background: rgba(0, 0, 0, 0.75);
                    color: #ef4444;
                    letter-spacing: 0.32em;
                    text-transform: uppercase;
                    font-size: 11px;
                    box-shadow: 10px 10px 0px #111;
                    text-decoration: none;
                    animation: rise-in 0.4s ease-out;
                }
                .booking-cta:active {
                    transform: scale(0.99);
                }
                .site-footer {
                    border-top: 2px solid #404040;
                    padding: 70px 24px;
                    position: relative;
                }
                .footer-icons {
                    display: flex;
                    justify-content: center;
                    gap: 18px;
                }
                .footer-credit {
                    margin-top: 42px;
                    text-align: center;
                    font-size: 10px;
                    letter-spacing: 0.35em;
                    text-transform: uppercase;
                    opacity: 0.55;
                }
                "#}
            </style>
        </div>
    }
}
