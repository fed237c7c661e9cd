use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::{AnamnesisQuestion, CreatePatientRequest, Patient, SubmitAnamnesisRequest};

use crate::components::notification::Notification;
use crate::components::patients::anamnesis_form::AnamnesisForm;
use crate::components::patients::anamnesis_questions::AnamnesisQuestions;
use crate::components::patients::patient_form::{PatientDraft, PatientFieldErrors, PatientForm};
use crate::hooks::use_toast::use_toast;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::masks::{mask_cpf, mask_phone};

fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

/// Pre-submission checks for the intake draft. Backend validation still
/// runs on top of this; these only catch what the masks make obvious.
fn validate_draft(draft: &PatientDraft) -> PatientFieldErrors {
    let mut errors = PatientFieldErrors::default();
    if draft.name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }
    if !draft.cpf.is_empty() && digit_count(&draft.cpf) != 11 {
        errors.cpf = Some("CPF must have 11 digits".to_string());
    }
    if !draft.phone.is_empty() && digit_count(&draft.phone) < 10 {
        errors.phone = Some("Phone must have at least 10 digits".to_string());
    }
    errors
}

#[derive(Properties, PartialEq)]
pub struct PatientsPageProps {
    pub api_client: ApiClient,
}

/// Patient management: the registered patient list, the intake form, the
/// anamnesis questionnaire admin, and per-patient anamnesis answers.
#[function_component(PatientsPage)]
pub fn patients_page(props: &PatientsPageProps) -> Html {
    let toast = use_toast();
    let patients = use_state(Vec::<Patient>::new);
    let patients_loading = use_state(|| true);
    let questions = use_state(Vec::<AnamnesisQuestion>::new);
    let questions_loading = use_state(|| true);
    let draft = use_state(PatientDraft::default);
    let field_errors = use_state(PatientFieldErrors::default);
    let saving = use_state(|| false);
    let selected_patient = use_state(|| Option::<Patient>::None);

    let refresh_patients = {
        let api_client = props.api_client.clone();
        let patients = patients.clone();
        let patients_loading = patients_loading.clone();
        let show_error = toast.show_error.clone();

        Callback::from(move |_: ()| {
            let api_client = api_client.clone();
            let patients = patients.clone();
            let patients_loading = patients_loading.clone();
            let show_error = show_error.clone();

            spawn_local(async move {
                patients_loading.set(true);
                match api_client.list_patients().await {
                    Ok(data) => patients.set(data),
                    Err(e) => show_error.emit(e.to_string()),
                }
                patients_loading.set(false);
            });
        })
    };

    let refresh_questions = {
        let api_client = props.api_client.clone();
        let questions = questions.clone();
        let questions_loading = questions_loading.clone();
        let show_error = toast.show_error.clone();

        Callback::from(move |_: ()| {
            let api_client = api_client.clone();
            let questions = questions.clone();
            let questions_loading = questions_loading.clone();
            let show_error = show_error.clone();

            spawn_local(async move {
                questions_loading.set(true);
                match api_client.list_anamnesis_questions().await {
                    Ok(data) => questions.set(data),
                    Err(e) => show_error.emit(e.to_string()),
                }
                questions_loading.set(false);
            });
        })
    };

    use_effect_with((), {
        let refresh_patients = refresh_patients.clone();
        let refresh_questions = refresh_questions.clone();
        move |_| {
            refresh_patients.emit(());
            refresh_questions.emit(());
            || ()
        }
    });

    // Intake form field handlers; CPF and phone are masked on every
    // keystroke
    let on_name_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(PatientDraft {
                name: input.value(),
                ..(*draft).clone()
            });
        })
    };
    let on_cpf_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(PatientDraft {
                cpf: mask_cpf(&input.value()),
                ..(*draft).clone()
            });
        })
    };
    let on_phone_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(PatientDraft {
                phone: mask_phone(&input.value()),
                ..(*draft).clone()
            });
        })
    };
    let on_birth_date_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(PatientDraft {
                birth_date: input.value(),
                ..(*draft).clone()
            });
        })
    };
    let on_email_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(PatientDraft {
                email: input.value(),
                ..(*draft).clone()
            });
        })
    };
    let on_notes_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(PatientDraft {
                notes: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let draft = draft.clone();
        let field_errors = field_errors.clone();
        let saving = saving.clone();
        let refresh_patients = refresh_patients.clone();
        let show_success = toast.show_success.clone();
        let show_error = toast.show_error.clone();

        Callback::from(move |_: ()| {
            let errors = validate_draft(&draft);
            if !errors.is_empty() {
                field_errors.set(errors);
                return;
            }
            field_errors.set(PatientFieldErrors::default());

            let current = (*draft).clone();
            let request = CreatePatientRequest {
                name: current.name.trim().to_string(),
                cpf: current.cpf.clone(),
                phone: current.phone.clone(),
                birth_date: date_utils::parse_date(&current.birth_date),
                email: if current.email.is_empty() {
                    None
                } else {
                    Some(current.email.clone())
                },
                notes: if current.notes.is_empty() {
                    None
                } else {
                    Some(current.notes.clone())
                },
            };

            let api_client = api_client.clone();
            let draft = draft.clone();
            let saving = saving.clone();
            let refresh_patients = refresh_patients.clone();
            let show_success = show_success.clone();
            let show_error = show_error.clone();

            spawn_local(async move {
                saving.set(true);
                match api_client.create_patient(&request).await {
                    Ok(()) => {
                        draft.set(PatientDraft::default());
                        show_success.emit("Patient saved".to_string());
                        refresh_patients.emit(());
                    }
                    Err(e) => show_error.emit(e.to_string()),
                }
                saving.set(false);
            });
        })
    };

    let on_add_question = {
        let api_client = props.api_client.clone();
        let refresh_questions = refresh_questions.clone();
        let show_error = toast.show_error.clone();

        Callback::from(move |text: String| {
            let api_client = api_client.clone();
            let refresh_questions = refresh_questions.clone();
            let show_error = show_error.clone();

            spawn_local(async move {
                match api_client.create_anamnesis_question(text).await {
                    Ok(()) => refresh_questions.emit(()),
                    Err(e) => show_error.emit(e.to_string()),
                }
            });
        })
    };

    let on_delete_question = {
        let api_client = props.api_client.clone();
        let refresh_questions = refresh_questions.clone();
        let show_error = toast.show_error.clone();

        Callback::from(move |id: i64| {
            let api_client = api_client.clone();
            let refresh_questions = refresh_questions.clone();
            let show_error = show_error.clone();

            spawn_local(async move {
                match api_client.delete_anamnesis_question(id).await {
                    Ok(()) => refresh_questions.emit(()),
                    Err(e) => show_error.emit(e.to_string()),
                }
            });
        })
    };

    let on_anamnesis_submit = {
        let api_client = props.api_client.clone();
        let selected_patient = selected_patient.clone();
        let show_success = toast.show_success.clone();
        let show_error = toast.show_error.clone();

        Callback::from(move |request: SubmitAnamnesisRequest| {
            let Some(patient) = (*selected_patient).clone() else {
                return;
            };
            let api_client = api_client.clone();
            let selected_patient = selected_patient.clone();
            let show_success = show_success.clone();
            let show_error = show_error.clone();

            spawn_local(async move {
                match api_client.submit_anamnesis(patient.id, &request).await {
                    Ok(()) => {
                        show_success.emit("Anamnesis saved".to_string());
                        selected_patient.set(None);
                    }
                    Err(e) => show_error.emit(e.to_string()),
                }
            });
        })
    };

    let on_close_anamnesis = {
        let selected_patient = selected_patient.clone();
        Callback::from(move |_: ()| selected_patient.set(None))
    };

    html! {
        <div class="page patients-page">
            <Notification toast={toast.toast.clone()} />

            <section class="patients-list-section">
                <h2>{"Patients"}</h2>
                {if *patients_loading {
                    html! { <div class="loading">{"Loading patients..."}</div> }
                } else if patients.is_empty() {
                    html! { <p class="patients-empty">{"No patients registered"}</p> }
                } else {
                    html! {
                        <div class="table-container">
                            <table class="patients-table">
                                <thead>
                                    <tr>
                                        <th>{"Name"}</th>
                                        <th>{"CPF"}</th>
                                        <th>{"Phone"}</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {for patients.iter().map(|patient| {
                                        let open_anamnesis = {
                                            let selected_patient = selected_patient.clone();
                                            let patient = patient.clone();
                                            Callback::from(move |_: MouseEvent| {
                                                selected_patient.set(Some(patient.clone()));
                                            })
                                        };
                                        html! {
                                            <tr>
                                                <td>{&patient.name}</td>
                                                <td>{&patient.cpf}</td>
                                                <td>{&patient.phone}</td>
                                                <td class="actions">
                                                    <button class="btn btn-link" onclick={open_anamnesis}>
                                                        {"Anamnesis"}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })}
                                </tbody>
                            </table>
                        </div>
                    }
                }}
            </section>

            {if let Some(patient) = (*selected_patient).clone() {
                html! {
                    <section class="anamnesis-section">
                        <AnamnesisForm
                            patient={patient}
                            questions={(*questions).clone()}
                            on_submit={on_anamnesis_submit}
                            on_close={on_close_anamnesis}
                        />
                    </section>
                }
            } else {
                html! {}
            }}

            <section class="patient-intake-section">
                <PatientForm
                    draft={(*draft).clone()}
                    field_errors={(*field_errors).clone()}
                    saving={*saving}
                    on_name_change={on_name_change}
                    on_cpf_input={on_cpf_input}
                    on_phone_input={on_phone_input}
                    on_birth_date_change={on_birth_date_change}
                    on_email_change={on_email_change}
                    on_notes_change={on_notes_change}
                    on_submit={on_submit}
                />
            </section>

            <section class="anamnesis-admin-section">
                <AnamnesisQuestions
                    questions={(*questions).clone()}
                    loading={*questions_loading}
                    on_add={on_add_question}
                    on_delete={on_delete_question}
                />
            </section>
        </div>
    }
}
