use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::{BookingSlot, CreateAppointmentRequest};

use crate::components::notification::Notification;
use crate::hooks::use_toast::use_toast;
use crate::services::api::ApiClient;
use crate::services::clipboard;
use crate::services::date_utils;
use crate::services::masks::{mask_cpf, mask_phone};

/// Draft of the public booking form.
#[derive(Clone, PartialEq, Default)]
struct BookingDraft {
    name: String,
    phone: String,
    cpf: String,
}

#[derive(Properties, PartialEq)]
pub struct BookingPageProps {
    pub api_client: ApiClient,
}

/// Public booking portal: pick a day, pick a free slot, leave your
/// details. Free slots come fully computed from the backend.
#[function_component(BookingPage)]
pub fn booking_page(props: &BookingPageProps) -> Html {
    let toast = use_toast();
    let date = use_state(date_utils::current_date);
    let slots = use_state(Vec::<BookingSlot>::new);
    let loading = use_state(|| false);
    let selected = use_state(|| Option::<BookingSlot>::None);
    let draft = use_state(BookingDraft::default);
    let booked = use_state(|| false);

    // Refetch free slots whenever the chosen day changes
    use_effect_with(date.clone(), {
        let api_client = props.api_client.clone();
        let slots = slots.clone();
        let loading = loading.clone();
        let selected = selected.clone();
        let show_error = toast.show_error.clone();

        move |date: &UseStateHandle<String>| {
            let api_client = api_client.clone();
            let slots = slots.clone();
            let loading = loading.clone();
            let selected = selected.clone();
            let show_error = show_error.clone();
            let day = (**date).clone();

            spawn_local(async move {
                let Some(parsed) = date_utils::parse_date(&day) else {
                    slots.set(Vec::new());
                    return;
                };
                loading.set(true);
                selected.set(None);
                match api_client.booking_slots(parsed).await {
                    Ok(data) => slots.set(data),
                    Err(e) => show_error.emit(e.to_string()),
                }
                loading.set(false);
            });
            || ()
        }
    });

    let on_date_change = {
        let date = date.clone();
        let booked = booked.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            booked.set(false);
            date.set(input.value());
        })
    };

    let on_name_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(BookingDraft {
                name: input.value(),
                ..(*draft).clone()
            });
        })
    };
    let on_phone_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(BookingDraft {
                phone: mask_phone(&input.value()),
                ..(*draft).clone()
            });
        })
    };
    let on_cpf_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(BookingDraft {
                cpf: mask_cpf(&input.value()),
                ..(*draft).clone()
            });
        })
    };

    let on_copy_link = Callback::from(move |_: MouseEvent| {
        // Failure here is silent by design; worst case the visitor copies
        // the address bar themselves
        if let Some(href) = web_sys::window()
            .and_then(|w| w.location().href().ok())
        {
            clipboard::copy_text(&href);
        }
    });

    let on_submit = {
        let api_client = props.api_client.clone();
        let date = date.clone();
        let selected = selected.clone();
        let draft = draft.clone();
        let booked = booked.clone();
        let show_error = toast.show_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(parsed_date) = date_utils::parse_date(&date) else {
                show_error.emit("Pick a valid date".to_string());
                return;
            };
            let Some(slot) = (*selected).clone() else {
                show_error.emit("Pick a time slot first".to_string());
                return;
            };
            if draft.name.trim().is_empty() || draft.phone.is_empty() {
                show_error.emit("Fill in your name and phone".to_string());
                return;
            }

            let request = CreateAppointmentRequest {
                date: parsed_date,
                availability_id: slot.availability_id,
                name: draft.name.trim().to_string(),
                phone: draft.phone.clone(),
                cpf: draft.cpf.clone(),
            };

            let api_client = api_client.clone();
            let draft = draft.clone();
            let selected = selected.clone();
            let booked = booked.clone();
            let show_error = show_error.clone();

            spawn_local(async move {
                match api_client.create_appointment(&request).await {
                    Ok(()) => {
                        draft.set(BookingDraft::default());
                        selected.set(None);
                        booked.set(true);
                    }
                    Err(e) => show_error.emit(e.to_string()),
                }
            });
        })
    };

    html! {
        <div class="page booking-page">
            <Notification toast={toast.toast.clone()} />

            <div class="booking-header">
                <h2>{"Book an appointment"}</h2>
                <button class="btn btn-link" onclick={on_copy_link}>
                    {"Copy booking link"}
                </button>
            </div>

            {if *booked {
                html! {
                    <div class="booking-confirmation">
                        <p>{"Your appointment request was received. See you soon!"}</p>
                    </div>
                }
            } else {
                html! {}
            }}

            <div class="form-group">
                <label for="booking-date">{"Date"}</label>
                <input
                    type="date"
                    id="booking-date"
                    value={(*date).clone()}
                    onchange={on_date_change}
                />
                <span class="booking-weekday">
                    {date_utils::weekday_of(&date)
                        .map(|day| day.label())
                        .unwrap_or("")}
                </span>
            </div>

            <div class="booking-slots">
                {if *loading {
                    html! { <div class="loading">{"Looking for free times..."}</div> }
                } else if slots.is_empty() {
                    html! { <p class="slots-empty">{"No free times on this day"}</p> }
                } else {
                    html! {
                        <div class="slot-options">
                            {for slots.iter().map(|slot| {
                                let is_selected = selected.as_ref() == Some(slot);
                                let class = if is_selected {
                                    "slot-option selected"
                                } else {
                                    "slot-option"
                                };
                                let pick = {
                                    let selected = selected.clone();
                                    let slot = slot.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        selected.set(Some(slot.clone()));
                                    })
                                };
                                html! {
                                    <button type="button" class={class} onclick={pick}>
                                        {format!("{} - {}", slot.start_time, slot.end_time)}
                                    </button>
                                }
                            })}
                        </div>
                    }
                }}
            </div>

            <form class="booking-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="booking-name">{"Your name"}</label>
                    <input
                        type="text"
                        id="booking-name"
                        value={draft.name.clone()}
                        onchange={on_name_change}
                    />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="booking-phone">{"Phone"}</label>
                        <input
                            type="text"
                            id="booking-phone"
                            placeholder="(00) 00000-0000"
                            value={draft.phone.clone()}
                            oninput={on_phone_input}
                        />
                    </div>
                    <div class="form-group">
                        <label for="booking-cpf">{"CPF"}</label>
                        <input
                            type="text"
                            id="booking-cpf"
                            placeholder="000.000.000-00"
                            value={draft.cpf.clone()}
                            oninput={on_cpf_input}
                        />
                    </div>
                </div>
                <button type="submit" class="btn btn-primary">{"Request appointment"}</button>
            </form>
        </div>
    }
}
