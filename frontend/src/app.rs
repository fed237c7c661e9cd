use yew::prelude::*;

use crate::components::appointments::DashboardPage;
use crate::components::availability::AvailabilityPage;
use crate::components::booking::BookingPage;
use crate::components::header::Header;
use crate::components::patients::PatientsPage;
use crate::services::api::ApiClient;

/// The pages of the app. Navigation is plain component state; switching
/// pages unmounts the old one, which also discards its form drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Availability,
    Patients,
    Booking,
}

#[function_component(App)]
pub fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let current_page = use_state(|| Page::Dashboard);

    let on_navigate = {
        let current_page = current_page.clone();
        Callback::from(move |page: Page| current_page.set(page))
    };

    let page = match *current_page {
        Page::Dashboard => html! { <DashboardPage api_client={(*api_client).clone()} /> },
        Page::Availability => html! { <AvailabilityPage api_client={(*api_client).clone()} /> },
        Page::Patients => html! { <PatientsPage api_client={(*api_client).clone()} /> },
        Page::Booking => html! { <BookingPage api_client={(*api_client).clone()} /> },
    };

    html! {
        <>
            <Header current_page={*current_page} on_navigate={on_navigate} />
            <main class="main">
                <div class="container">
                    {page}
                </div>
            </main>
        </>
    }
}
