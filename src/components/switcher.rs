use yew::prelude::*;

use crate::catalog::Collection;

#[derive(Properties, PartialEq)]
pub struct SwitcherProps {
    pub collections: &'static [Collection],
    pub active_key: AttrValue,
    pub on_select: Callback<AttrValue>,
}

#[function_component(Switcher)]
pub fn switcher(props: &SwitcherProps) -> Html {
    html! {
        <section class="switcher">
            <div class="switcher-tabs">
                {
                    props.collections.iter().map(|collection| {
                        let is_active = *props.active_key == *collection.key;
                        let onclick = {
                            let on_select = props.on_select.clone();
                            let key = AttrValue::Static(collection.key);
                            Callback::from(move |_: MouseEvent| on_select.emit(key.clone()))
                        };
                        html! {
                            <button
                                key={collection.key}
                                type="button"
                                class={classes!("switcher-tab", is_active.then(|| "active"))}
                                {onclick}
                            >
                                {collection.label}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .switcher {
                    position: sticky;
                    top: 0;
                    z-index: 20;
                    background: #0a0a0a;
                    border-top: 2px solid #404040;
                    border-bottom: 2px solid #404040;
                    padding: 14px 18px;
                }
                .switcher-tabs {
                    display: flex;
                    justify-content: center;
                    gap: 10px;
                    flex-wrap: wrap;
                }
                .switcher-tab {
                    padding: 10px 12px;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    font-size: 12px;
                    font-family: inherit;
                    cursor: pointer;
                    border: 2px solid #404040;
                    color: #bdbdbd;
                    background: transparent;
                }
                .switcher-tab.active {
                    border-color: #ef4444;
                    color: #ef4444;
                }
                "#}
            </style>
        </section>
    }
}
