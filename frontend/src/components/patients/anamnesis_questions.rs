use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::AnamnesisQuestion;

#[derive(Properties, PartialEq)]
pub struct AnamnesisQuestionsProps {
    pub questions: Vec<AnamnesisQuestion>,
    pub loading: bool,
    pub on_add: Callback<String>,
    pub on_delete: Callback<i64>,
}

/// Management of the anamnesis questionnaire: the questions every new
/// patient answers during intake.
#[function_component(AnamnesisQuestions)]
pub fn anamnesis_questions(props: &AnamnesisQuestionsProps) -> Html {
    let new_question = use_state(String::new);

    let on_input = {
        let new_question = new_question.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_question.set(input.value());
        })
    };

    let on_submit = {
        let new_question = new_question.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = (*new_question).trim().to_string();
            if text.is_empty() {
                return;
            }
            on_add.emit(text);
            new_question.set(String::new());
        })
    };

    html! {
        <div class="anamnesis-questions">
            <h3>{"Anamnesis questions"}</h3>
            {if props.loading {
                html! { <div class="loading">{"Loading questions..."}</div> }
            } else if props.questions.is_empty() {
                html! { <p class="questions-empty">{"No questions yet"}</p> }
            } else {
                html! {
                    <ul class="question-items">
                        {for props.questions.iter().map(|question| {
                            let id = question.id;
                            let on_delete = {
                                let on_delete = props.on_delete.clone();
                                Callback::from(move |_: MouseEvent| on_delete.emit(id))
                            };
                            html! {
                                <li class="question-item">
                                    <span class="question-text">{&question.text}</span>
                                    <button class="btn btn-link" onclick={on_delete}>
                                        {"Remove"}
                                    </button>
                                </li>
                            }
                        })}
                    </ul>
                }
            }}
            <form class="question-form" onsubmit={on_submit}>
                <input
                    type="text"
                    placeholder="New question..."
                    value={(*new_question).clone()}
                    oninput={on_input}
                />
                <button type="submit" class="btn">{"Add"}</button>
            </form>
        </div>
    }
}
