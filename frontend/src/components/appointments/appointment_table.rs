use yew::prelude::*;

use shared::{Appointment, AppointmentStatus};

#[derive(Properties, PartialEq)]
pub struct AppointmentTableProps {
    pub appointments: Vec<Appointment>,
    pub loading: bool,
    pub on_set_status: Callback<(i64, AppointmentStatus)>,
}

fn status_class(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Scheduled => "status scheduled",
        AppointmentStatus::Confirmed => "status confirmed",
        AppointmentStatus::Completed => "status completed",
        AppointmentStatus::Cancelled => "status cancelled",
    }
}

#[function_component(AppointmentTable)]
pub fn appointment_table(props: &AppointmentTableProps) -> Html {
    if props.loading {
        return html! { <div class="loading">{"Loading appointments..."}</div> };
    }
    if props.appointments.is_empty() {
        return html! { <p class="appointments-empty">{"No appointments on this day"}</p> };
    }

    html! {
        <div class="table-container">
            <table class="appointments-table">
                <thead>
                    <tr>
                        <th>{"Time"}</th>
                        <th>{"Patient"}</th>
                        <th>{"Phone"}</th>
                        <th>{"Status"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {for props.appointments.iter().map(|appointment| {
                        let id = appointment.id;
                        let confirm = {
                            let on_set_status = props.on_set_status.clone();
                            Callback::from(move |_: MouseEvent| {
                                on_set_status.emit((id, AppointmentStatus::Confirmed));
                            })
                        };
                        let cancel = {
                            let on_set_status = props.on_set_status.clone();
                            Callback::from(move |_: MouseEvent| {
                                on_set_status.emit((id, AppointmentStatus::Cancelled));
                            })
                        };
                        let actionable = matches!(
                            appointment.status,
                            AppointmentStatus::Scheduled | AppointmentStatus::Confirmed
                        );
                        html! {
                            <tr>
                                <td class="time">
                                    {format!("{} - {}", appointment.start_time, appointment.end_time)}
                                </td>
                                <td class="patient">{&appointment.patient_name}</td>
                                <td class="phone">{&appointment.patient_phone}</td>
                                <td>
                                    <span class={status_class(appointment.status)}>
                                        {appointment.status.label()}
                                    </span>
                                </td>
                                <td class="actions">
                                    {if actionable {
                                        html! {
                                            <>
                                                {if appointment.status == AppointmentStatus::Scheduled {
                                                    html! {
                                                        <button class="btn btn-link" onclick={confirm}>
                                                            {"Confirm"}
                                                        </button>
                                                    }
                                                } else {
                                                    html! {}
                                                }}
                                                <button class="btn btn-link" onclick={cancel}>
                                                    {"Cancel"}
                                                </button>
                                            </>
                                        }
                                    } else {
                                        html! {}
                                    }}
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
