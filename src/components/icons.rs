use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or(40)]
    pub size: u32,
}

fn svg_shell(size: u32, body: Html) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { body }
        </svg>
    }
}

#[function_component(InstagramIcon)]
pub fn instagram_icon(props: &IconProps) -> Html {
    svg_shell(
        props.size,
        html! {
            <>
                <rect width="20" height="20" x="2" y="2" rx="5" ry="5" />
                <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                <line x1="17.5" x2="17.51" y1="6.5" y2="6.5" />
            </>
        },
    )
}

#[function_component(MailIcon)]
pub fn mail_icon(props: &IconProps) -> Html {
    svg_shell(
        props.size,
        html! {
            <>
                <rect width="20" height="16" x="2" y="4" rx="2" />
                <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
            </>
        },
    )
}

#[function_component(CloseIcon)]
pub fn close_icon(props: &IconProps) -> Html {
    svg_shell(
        props.size,
        html! {
            <>
                <path d="M18 6 6 18" />
                <path d="m6 6 12 12" />
            </>
        },
    )
}
