use yew::prelude::*;

use shared::DayOfWeek;

use crate::hooks::use_availabilities::AvailabilitiesState;

#[derive(Properties, PartialEq)]
pub struct SlotListProps {
    pub state: AvailabilitiesState,
    pub on_delete: Callback<i64>,
    /// Drag outcome within a weekday group: (day, from, to).
    pub on_reorder: Callback<(DayOfWeek, usize, usize)>,
}

/// Weekly slot overview, one section per weekday. Items are draggable to
/// reorder within their weekday; drops across weekdays are ignored.
#[function_component(SlotList)]
pub fn slot_list(props: &SlotListProps) -> Html {
    // (day, index) of the item currently being dragged
    let drag_source = use_state(|| Option::<(DayOfWeek, usize)>::None);

    if props.state.loading {
        return html! { <div class="loading">{"Loading slots..."}</div> };
    }

    html! {
        <div class="slot-lists">
            {for DayOfWeek::ALL.iter().map(|day| {
                let day = *day;
                let slots = props.state.for_day(day);
                html! {
                    <section class="slot-day">
                        <h4>{day.label()}</h4>
                        {if slots.is_empty() {
                            html! { <p class="slot-empty">{"No slots"}</p> }
                        } else {
                            html! {
                                <ul class="slot-items">
                                    {for slots.iter().enumerate().map(|(index, slot)| {
                                        let ondragstart = {
                                            let drag_source = drag_source.clone();
                                            Callback::from(move |_: DragEvent| {
                                                drag_source.set(Some((day, index)));
                                            })
                                        };
                                        let ondragover =
                                            Callback::from(|e: DragEvent| e.prevent_default());
                                        let ondrop = {
                                            let drag_source = drag_source.clone();
                                            let on_reorder = props.on_reorder.clone();
                                            Callback::from(move |e: DragEvent| {
                                                e.prevent_default();
                                                if let Some((source_day, from)) = *drag_source {
                                                    if source_day == day {
                                                        on_reorder.emit((day, from, index));
                                                    }
                                                }
                                                drag_source.set(None);
                                            })
                                        };
                                        let on_delete = {
                                            let on_delete = props.on_delete.clone();
                                            let id = slot.id;
                                            Callback::from(move |_: MouseEvent| on_delete.emit(id))
                                        };
                                        html! {
                                            <li
                                                class="slot-item"
                                                draggable="true"
                                                {ondragstart}
                                                {ondragover}
                                                {ondrop}
                                            >
                                                <span class="slot-time">
                                                    {format!("{} - {}", slot.start_time, slot.end_time)}
                                                </span>
                                                <button class="btn btn-link" onclick={on_delete}>
                                                    {"Remove"}
                                                </button>
                                            </li>
                                        }
                                    })}
                                </ul>
                            }
                        }}
                    </section>
                }
            })}
        </div>
    }
}
