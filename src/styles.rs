use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            html, body {
                margin: 0;
                padding: 0;
                background: #0a0a0a;
            }
            *, *::before, *::after {
                box-sizing: border-box;
            }
            @keyframes fade-in {
                from { opacity: 0; }
                to { opacity: 1; }
            }
            @keyframes fade-out {
                from { opacity: 1; }
                to { opacity: 0; }
            }
            @keyframes settle-in {
                from { transform: scale(0.96); }
                to { transform: scale(1); }
            }
            @keyframes rise-in {
                from { opacity: 0; transform: translateY(16px); }
                to { opacity: 1; transform: translateY(0); }
            }
            @keyframes tooltip-in {
                from { opacity: 0; transform: translate(-50%, 10px) scale(0.98); }
                to { opacity: 1; transform: translate(-50%, 0) scale(1); }
            }
            @keyframes micro-strobe {
                0% { opacity: 0; }
                25% { opacity: 0.08; }
                50% { opacity: 0; }
                75% { opacity: 0.06; }
                100% { opacity: 0; }
            }
        "#)} />
    }
}
