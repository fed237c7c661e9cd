use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use shared::{CreateAvailabilityRequest, DayOfWeek, TimeOfDay};

use crate::services::masks::mask_time;

#[derive(Clone, PartialEq, Default)]
struct SlotDraft {
    day_value: Option<DayOfWeek>,
    start_time: String,
    end_time: String,
}

#[derive(Properties, PartialEq)]
pub struct SlotFormProps {
    pub on_create: Callback<CreateAvailabilityRequest>,
    pub on_invalid: Callback<String>,
}

/// Manual entry of a single slot, for the odd interval the generator's
/// fixed durations cannot express.
#[function_component(SlotForm)]
pub fn slot_form(props: &SlotFormProps) -> Html {
    let draft = use_state(SlotDraft::default);

    let on_day_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let day = select
                .value()
                .parse::<u8>()
                .ok()
                .and_then(|v| DayOfWeek::try_from(v).ok());
            draft.set(SlotDraft {
                day_value: day,
                ..(*draft).clone()
            });
        })
    };

    let on_start_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(SlotDraft {
                start_time: mask_time(&input.value()),
                ..(*draft).clone()
            });
        })
    };

    let on_end_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(SlotDraft {
                end_time: mask_time(&input.value()),
                ..(*draft).clone()
            });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let on_create = props.on_create.clone();
        let on_invalid = props.on_invalid.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(day_of_week) = draft.day_value else {
                on_invalid.emit("Pick a day of the week".to_string());
                return;
            };
            if draft.start_time.is_empty() || draft.end_time.is_empty() {
                on_invalid.emit("Fill in both the start and end time".to_string());
                return;
            }
            let (Ok(start_time), Ok(end_time)) = (
                draft.start_time.parse::<TimeOfDay>(),
                draft.end_time.parse::<TimeOfDay>(),
            ) else {
                on_invalid.emit("Times must be valid HH:MM values".to_string());
                return;
            };
            if start_time >= end_time {
                on_invalid.emit("End time must be after the start time".to_string());
                return;
            }
            on_create.emit(CreateAvailabilityRequest {
                day_of_week,
                start_time,
                end_time,
            });
            draft.set(SlotDraft::default());
        })
    };

    html! {
        <form class="slot-form" onsubmit={on_submit}>
            <h3>{"Add a single slot"}</h3>
            <div class="form-row">
                <div class="form-group">
                    <label for="slot-day">{"Day of week"}</label>
                    <select id="slot-day" onchange={on_day_change}>
                        <option value="" selected={draft.day_value.is_none()}>
                            {"Choose..."}
                        </option>
                        {for DayOfWeek::ALL.iter().map(|day| {
                            html! {
                                <option
                                    value={u8::from(*day).to_string()}
                                    selected={draft.day_value == Some(*day)}
                                >
                                    {day.label()}
                                </option>
                            }
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="slot-start">{"Start"}</label>
                    <input
                        type="text"
                        id="slot-start"
                        placeholder="08:00"
                        value={draft.start_time.clone()}
                        oninput={on_start_input}
                    />
                </div>
                <div class="form-group">
                    <label for="slot-end">{"End"}</label>
                    <input
                        type="text"
                        id="slot-end"
                        placeholder="08:50"
                        value={draft.end_time.clone()}
                        oninput={on_end_input}
                    />
                </div>
            </div>
            <button type="submit" class="btn">{"Add slot"}</button>
        </form>
    }
}
