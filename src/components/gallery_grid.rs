use yew::prelude::*;

use crate::catalog::Collection;
use crate::gallery::thumbnails;

#[derive(Properties, PartialEq)]
pub struct GalleryGridProps {
    pub collection: &'static Collection,
    pub on_open: Callback<AttrValue>,
}

#[function_component(GalleryGrid)]
pub fn gallery_grid(props: &GalleryGridProps) -> Html {
    let collection = props.collection;

    html! {
        <section class="gallery">
            <div class="gallery-location">{collection.location}</div>
            <div class="gallery-feed">
                {
                    thumbnails(collection).map(|thumb| {
                        let onclick = {
                            let on_open = props.on_open.clone();
                            let url = thumb.url.clone();
                            Callback::from(move |_: MouseEvent| on_open.emit(url.clone()))
                        };
                        html! {
                            <button
                                key={format!("{}-{}", collection.key, thumb.index)}
                                type="button"
                                class="gallery-item"
                                {onclick}
                            >
                                <img src={thumb.url} alt={thumb.alt} loading="lazy" />
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .gallery {
                    padding: 42px 24px 90px;
                    position: relative;
                }
                .gallery-location {
                    text-align: center;
                    font-size: 11px;
                    letter-spacing: 0.32em;
                    text-transform: uppercase;
                    opacity: 0.7;
                    margin-bottom: 22px;
                }
                .gallery-feed {
                    display: grid;
                    grid-template-columns: repeat(1, minmax(0, 1fr));
                    gap: 18px;
                    max-width: 980px;
                    margin: 0 auto;
                }
                .gallery-item {
                    padding: 0;
                    border: 6px solid #737373;
                    background: #000;
                    cursor: zoom-in;
                    transition: transform 0.1s ease-out;
                }
                .gallery-item:active {
                    transform: scale(0.99);
                }
                .gallery-item img {
                    width: 100%;
                    aspect-ratio: 4 / 5;
                    object-fit: cover;
                    filter: grayscale(1) contrast(1.25);
                    display: block;
                }
                "#}
            </style>
        </section>
    }
}
