use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::{CreateBlockRequest, TimeOfDay};

use crate::services::date_utils;
use crate::services::masks::mask_time;

#[derive(Clone, PartialEq, Default)]
struct BlockDraft {
    date: String,
    end_date: String,
    full_day: bool,
    start_time: String,
    end_time: String,
}

#[derive(Properties, PartialEq)]
pub struct BlockFormProps {
    pub on_create: Callback<CreateBlockRequest>,
    pub on_invalid: Callback<String>,
}

/// Declares practitioner unavailability: a single date or a range, either
/// the whole day or a time window. The backend expands ranges into per-day
/// records; the client only sends the request.
#[function_component(BlockForm)]
pub fn block_form(props: &BlockFormProps) -> Html {
    let draft = use_state(BlockDraft::default);

    let on_date_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(BlockDraft {
                date: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_end_date_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(BlockDraft {
                end_date: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_full_day_toggle = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(BlockDraft {
                full_day: input.checked(),
                ..(*draft).clone()
            });
        })
    };

    let on_start_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(BlockDraft {
                start_time: mask_time(&input.value()),
                ..(*draft).clone()
            });
        })
    };

    let on_end_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(BlockDraft {
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
            let Some(date) = date_utils::parse_date(&draft.date) else {
                on_invalid.emit("Pick a date for the block".to_string());
                return;
            };
            let end_date = if draft.end_date.is_empty() {
                None
            } else {
                match date_utils::parse_date(&draft.end_date) {
                    Some(end) if end >= date => Some(end),
                    Some(_) => {
                        on_invalid.emit("End date must not be before the start date".to_string());
                        return;
                    }
                    None => {
                        on_invalid.emit("End date is not a valid date".to_string());
                        return;
                    }
                }
            };

            let (start_time, end_time) = if draft.full_day {
                (None, None)
            } else {
                if draft.start_time.is_empty() || draft.end_time.is_empty() {
                    on_invalid.emit("Fill in both the start and end time".to_string());
                    return;
                }
                let (Ok(start), Ok(end)) = (
                    draft.start_time.parse::<TimeOfDay>(),
                    draft.end_time.parse::<TimeOfDay>(),
                ) else {
                    on_invalid.emit("Times must be valid HH:MM values".to_string());
                    return;
                };
                if start >= end {
                    on_invalid.emit("End time must be after the start time".to_string());
                    return;
                }
                (Some(start), Some(end))
            };

            on_create.emit(CreateBlockRequest {
                date,
                end_date,
                full_day: draft.full_day,
                start_time,
                end_time,
            });
            draft.set(BlockDraft::default());
        })
    };

    html! {
        <form class="block-form" onsubmit={on_submit}>
            <h3>{"Block time off"}</h3>
            <div class="form-row">
                <div class="form-group">
                    <label for="block-date">{"Date"}</label>
                    <input
                        type="date"
                        id="block-date"
                        value={draft.date.clone()}
                        onchange={on_date_change}
                    />
                </div>
                <div class="form-group">
                    <label for="block-end-date">{"Until (optional)"}</label>
                    <input
                        type="date"
                        id="block-end-date"
                        value={draft.end_date.clone()}
                        onchange={on_end_date_change}
                    />
                </div>
                <div class="form-group checkbox-group">
                    <label for="block-full-day">
                        <input
                            type="checkbox"
                            id="block-full-day"
                            checked={draft.full_day}
                            onchange={on_full_day_toggle}
                        />
                        {"Whole day"}
                    </label>
                </div>
                {if !draft.full_day {
                    html! {
                        <>
                            <div class="form-group">
                                <label for="block-start">{"From"}</label>
                                <input
                                    type="text"
                                    id="block-start"
                                    placeholder="12:00"
                                    value={draft.start_time.clone()}
                                    oninput={on_start_input}
                                />
                            </div>
                            <div class="form-group">
                                <label for="block-end">{"To"}</label>
                                <input
                                    type="text"
                                    id="block-end"
                                    placeholder="14:00"
                                    value={draft.end_time.clone()}
                                    oninput={on_end_input}
                                />
                            </div>
                        </>
                    }
                } else {
                    html! {}
                }}
            </div>
            <button type="submit" class="btn">{"Create block"}</button>
        </form>
    }
}
