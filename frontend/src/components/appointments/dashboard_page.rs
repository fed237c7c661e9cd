use yew::prelude::*;

use crate::components::appointments::appointment_table::AppointmentTable;
use crate::components::notification::Notification;
use crate::hooks::use_appointments::use_appointments;
use crate::hooks::use_toast::use_toast;
use crate::services::api::ApiClient;
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub api_client: ApiClient,
}

/// Practitioner dashboard: the appointment list for one day, with
/// previous/today/next navigation.
#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let toast = use_toast();
    let appointments = use_appointments(&props.api_client, toast.show_error.clone());

    html! {
        <div class="page dashboard-page">
            <Notification toast={toast.toast.clone()} />

            <div class="day-header">
                <button class="day-nav-btn" onclick={appointments.actions.prev_day.clone()}>
                    {"‹"}
                </button>
                <h2 class="day-title">
                    {date_utils::format_date_display(&appointments.state.date)}
                </h2>
                <button class="day-nav-btn" onclick={appointments.actions.next_day.clone()}>
                    {"›"}
                </button>
                <button class="btn btn-link" onclick={appointments.actions.today.clone()}>
                    {"Today"}
                </button>
            </div>

            <AppointmentTable
                appointments={appointments.state.appointments.clone()}
                loading={appointments.state.loading}
                on_set_status={appointments.actions.set_status.clone()}
            />
        </div>
    }
}
