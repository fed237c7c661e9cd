use yew::prelude::*;

use crate::app::Page;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current_page: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav_button = |page: Page, label: &str| {
        let on_navigate = props.on_navigate.clone();
        let class = if props.current_page == page {
            "nav-btn active"
        } else {
            "nav-btn"
        };
        let label = label.to_string();
        html! {
            <button
                class={class}
                onclick={Callback::from(move |_| on_navigate.emit(page))}
            >
                {label}
            </button>
        }
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Odonto Agenda"}</h1>
                <nav class="header-nav">
                    {nav_button(Page::Dashboard, "Dashboard")}
                    {nav_button(Page::Availability, "Availability")}
                    {nav_button(Page::Patients, "Patients")}
                    {nav_button(Page::Booking, "Booking")}
                </nav>
            </div>
        </header>
    }
}
