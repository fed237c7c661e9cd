use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::{Appointment, AppointmentStatus};

use crate::services::api::ApiClient;
use crate::services::date_utils;

#[derive(Clone, PartialEq)]
pub struct AppointmentsState {
    /// Selected day as `YYYY-MM-DD`.
    pub date: String,
    pub appointments: Vec<Appointment>,
    pub loading: bool,
}

#[derive(Clone)]
pub struct UseAppointmentsActions {
    pub refresh: Callback<()>,
    pub prev_day: Callback<MouseEvent>,
    pub next_day: Callback<MouseEvent>,
    pub today: Callback<MouseEvent>,
    pub set_status: Callback<(i64, AppointmentStatus)>,
}

pub struct UseAppointmentsResult {
    pub state: AppointmentsState,
    pub actions: UseAppointmentsActions,
}

/// Per-day appointment list for the practitioner dashboard, with day
/// navigation. The backend filters by date; the client never slices the
/// list itself.
#[hook]
pub fn use_appointments(api_client: &ApiClient, on_error: Callback<String>) -> UseAppointmentsResult {
    let date = use_state(date_utils::current_date);
    let appointments = use_state(Vec::<Appointment>::new);
    let loading = use_state(|| true);

    let refresh = {
        let api_client = api_client.clone();
        let date = date.clone();
        let appointments = appointments.clone();
        let loading = loading.clone();
        let on_error = on_error.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let appointments = appointments.clone();
            let loading = loading.clone();
            let on_error = on_error.clone();
            let day = (*date).clone();

            spawn_local(async move {
                loading.set(true);
                match api_client.list_appointments(&day).await {
                    Ok(data) => appointments.set(data),
                    Err(e) => on_error.emit(e.to_string()),
                }
                loading.set(false);
            });
        })
    };

    let prev_day = {
        let date = date.clone();
        Callback::from(move |_: MouseEvent| {
            date.set(date_utils::shift_date(&date, -1));
        })
    };

    let next_day = {
        let date = date.clone();
        Callback::from(move |_: MouseEvent| {
            date.set(date_utils::shift_date(&date, 1));
        })
    };

    let today = {
        let date = date.clone();
        Callback::from(move |_: MouseEvent| {
            date.set(date_utils::current_date());
        })
    };

    let set_status = {
        let api_client = api_client.clone();
        let refresh = refresh.clone();
        let on_error = on_error.clone();

        Callback::from(move |(id, status): (i64, AppointmentStatus)| {
            let api_client = api_client.clone();
            let refresh = refresh.clone();
            let on_error = on_error.clone();

            spawn_local(async move {
                match api_client.update_appointment_status(id, status).await {
                    Ok(()) => refresh.emit(()),
                    Err(e) => on_error.emit(e.to_string()),
                }
            });
        })
    };

    // Reload whenever the selected day changes (covers the initial load)
    use_effect_with(date.clone(), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    UseAppointmentsResult {
        state: AppointmentsState {
            date: (*date).clone(),
            appointments: (*appointments).clone(),
            loading: *loading,
        },
        actions: UseAppointmentsActions {
            refresh,
            prev_day,
            next_day,
            today,
            set_status,
        },
    }
}
