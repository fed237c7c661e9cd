use std::collections::HashMap;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::{AnamnesisAnswer, AnamnesisQuestion, Patient, SubmitAnamnesisRequest};

#[derive(Clone, PartialEq, Default)]
struct AnswerDraft {
    answer: String,
    note: String,
}

#[derive(Properties, PartialEq)]
pub struct AnamnesisFormProps {
    pub patient: Patient,
    pub questions: Vec<AnamnesisQuestion>,
    pub on_submit: Callback<SubmitAnamnesisRequest>,
    pub on_close: Callback<()>,
}

/// Intake questionnaire for one patient: a yes/no answer plus an optional
/// note per question. Unanswered questions are simply not submitted.
#[function_component(AnamnesisForm)]
pub fn anamnesis_form(props: &AnamnesisFormProps) -> Html {
    let drafts = use_state(HashMap::<i64, AnswerDraft>::new);

    let set_answer = {
        let drafts = drafts.clone();
        Callback::from(move |(question_id, answer): (i64, String)| {
            let mut next = (*drafts).clone();
            next.entry(question_id).or_default().answer = answer;
            drafts.set(next);
        })
    };

    let set_note = {
        let drafts = drafts.clone();
        Callback::from(move |(question_id, note): (i64, String)| {
            let mut next = (*drafts).clone();
            next.entry(question_id).or_default().note = note;
            drafts.set(next);
        })
    };

    let on_submit = {
        let drafts = drafts.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let answers: Vec<AnamnesisAnswer> = drafts
                .iter()
                .filter(|(_, draft)| !draft.answer.is_empty())
                .map(|(question_id, draft)| AnamnesisAnswer {
                    question_id: *question_id,
                    answer: draft.answer.clone(),
                    note: if draft.note.is_empty() {
                        None
                    } else {
                        Some(draft.note.clone())
                    },
                })
                .collect();
            on_submit.emit(SubmitAnamnesisRequest { answers });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="anamnesis-form-wrapper">
            <div class="anamnesis-form-header">
                <h3>{format!("Anamnesis: {}", props.patient.name)}</h3>
                <button class="btn btn-link" onclick={on_close}>{"Close"}</button>
            </div>
            <form class="anamnesis-form" onsubmit={on_submit}>
                {for props.questions.iter().map(|question| {
                    let id = question.id;
                    let draft = drafts.get(&id).cloned().unwrap_or_default();
                    let radio = |value: &'static str, label: &'static str| {
                        let set_answer = set_answer.clone();
                        let checked = draft.answer == value;
                        html! {
                            <label class="answer-option">
                                <input
                                    type="radio"
                                    name={format!("question-{}", id)}
                                    checked={checked}
                                    onchange={Callback::from(move |_: Event| {
                                        set_answer.emit((id, value.to_string()));
                                    })}
                                />
                                {label}
                            </label>
                        }
                    };
                    let on_note_input = {
                        let set_note = set_note.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            set_note.emit((id, input.value()));
                        })
                    };
                    html! {
                        <div class="anamnesis-question">
                            <p class="question-text">{&question.text}</p>
                            <div class="answer-options">
                                {radio("yes", "Yes")}
                                {radio("no", "No")}
                            </div>
                            <input
                                type="text"
                                class="answer-note"
                                placeholder="Notes (optional)"
                                value={draft.note.clone()}
                                oninput={on_note_input}
                            />
                        </div>
                    }
                })}
                <button type="submit" class="btn btn-primary">{"Save answers"}</button>
            </form>
        </div>
    }
}
