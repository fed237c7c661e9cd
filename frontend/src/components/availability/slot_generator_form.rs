use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use shared::{CreateAvailabilityRequest, DayOfWeek};

use crate::services::masks::mask_time;
use crate::services::slots::{plan_shift, SLOT_DURATIONS};

/// Draft of the bulk generator form. An explicit struct per form keeps
/// field names checked at compile time.
#[derive(Clone, PartialEq)]
struct GeneratorDraft {
    day_of_week: DayOfWeek,
    start_time: String,
    end_time: String,
    duration_minutes: u16,
}

impl Default for GeneratorDraft {
    fn default() -> Self {
        Self {
            day_of_week: DayOfWeek::Monday,
            start_time: String::new(),
            end_time: String::new(),
            duration_minutes: SLOT_DURATIONS[0],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SlotGeneratorFormProps {
    /// Receives the validated batch; the page fires the create requests.
    pub on_generated: Callback<Vec<CreateAvailabilityRequest>>,
    pub on_invalid: Callback<String>,
}

/// Turns one working-shift declaration into a batch of uniform slots.
/// Validation happens entirely before anything is emitted; on success the
/// form clears itself.
#[function_component(SlotGeneratorForm)]
pub fn slot_generator_form(props: &SlotGeneratorFormProps) -> Html {
    let draft = use_state(GeneratorDraft::default);

    let on_day_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(day) = select
                .value()
                .parse::<u8>()
                .ok()
                .and_then(|v| DayOfWeek::try_from(v).ok())
            {
                draft.set(GeneratorDraft {
                    day_of_week: day,
                    ..(*draft).clone()
                });
            }
        })
    };

    let on_start_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(GeneratorDraft {
                start_time: mask_time(&input.value()),
                ..(*draft).clone()
            });
        })
    };

    let on_end_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(GeneratorDraft {
                end_time: mask_time(&input.value()),
                ..(*draft).clone()
            });
        })
    };

    let on_duration_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(minutes) = select.value().parse::<u16>() {
                if SLOT_DURATIONS.contains(&minutes) {
                    draft.set(GeneratorDraft {
                        duration_minutes: minutes,
                        ..(*draft).clone()
                    });
                }
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let on_generated = props.on_generated.clone();
        let on_invalid = props.on_invalid.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match plan_shift(
                draft.day_of_week,
                &draft.start_time,
                &draft.end_time,
                draft.duration_minutes,
            ) {
                Ok(batch) => {
                    on_generated.emit(batch);
                    draft.set(GeneratorDraft::default());
                }
                Err(error) => on_invalid.emit(error.to_string()),
            }
        })
    };

    html! {
        <form class="slot-generator-form" onsubmit={on_submit}>
            <h3>{"Generate slots from a shift"}</h3>
            <div class="form-row">
                <div class="form-group">
                    <label for="generator-day">{"Day of week"}</label>
                    <select id="generator-day" onchange={on_day_change}>
                        {for DayOfWeek::ALL.iter().map(|day| {
                            html! {
                                <option
                                    value={u8::from(*day).to_string()}
                                    selected={draft.day_of_week == *day}
                                >
                                    {day.label()}
                                </option>
                            }
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="generator-start">{"Shift start"}</label>
                    <input
                        type="text"
                        id="generator-start"
                        placeholder="08:00"
                        value={draft.start_time.clone()}
                        oninput={on_start_input}
                    />
                </div>
                <div class="form-group">
                    <label for="generator-end">{"Shift end"}</label>
                    <input
                        type="text"
                        id="generator-end"
                        placeholder="12:00"
                        value={draft.end_time.clone()}
                        oninput={on_end_input}
                    />
                </div>
                <div class="form-group">
                    <label for="generator-duration">{"Slot length"}</label>
                    <select id="generator-duration" onchange={on_duration_change}>
                        {for SLOT_DURATIONS.iter().map(|minutes| {
                            html! {
                                <option
                                    value={minutes.to_string()}
                                    selected={draft.duration_minutes == *minutes}
                                >
                                    {format!("{} min", minutes)}
                                </option>
                            }
                        })}
                    </select>
                </div>
            </div>
            <button type="submit" class="btn btn-primary">{"Create slots"}</button>
        </form>
    }
}
