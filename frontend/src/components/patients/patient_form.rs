use yew::prelude::*;

/// Draft of the patient intake form. The page owns this state; the form
/// only renders it.
#[derive(Clone, PartialEq, Default)]
pub struct PatientDraft {
    pub name: String,
    pub cpf: String,
    pub phone: String,
    pub birth_date: String,
    pub email: String,
    pub notes: String,
}

/// One error slot per validated field, filled before submission.
#[derive(Clone, PartialEq, Default)]
pub struct PatientFieldErrors {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
}

impl PatientFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.cpf.is_none() && self.phone.is_none()
    }
}

#[derive(Properties, PartialEq)]
pub struct PatientFormProps {
    pub draft: PatientDraft,
    pub field_errors: PatientFieldErrors,
    pub saving: bool,

    pub on_name_change: Callback<Event>,
    pub on_cpf_input: Callback<InputEvent>,
    pub on_phone_input: Callback<InputEvent>,
    pub on_birth_date_change: Callback<Event>,
    pub on_email_change: Callback<Event>,
    pub on_notes_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

fn field_error(slot: &Option<String>) -> Html {
    match slot {
        Some(message) => html! { <span class="field-error">{message}</span> },
        None => html! {},
    }
}

#[function_component(PatientForm)]
pub fn patient_form(props: &PatientFormProps) -> Html {
    html! {
        <form class="patient-form" onsubmit={
            let on_submit = props.on_submit.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                on_submit.emit(());
            })
        }>
            <h3>{"New patient"}</h3>
            <div class="form-group">
                <label for="patient-name">{"Name"}</label>
                <input
                    type="text"
                    id="patient-name"
                    value={props.draft.name.clone()}
                    onchange={props.on_name_change.clone()}
                    disabled={props.saving}
                />
                {field_error(&props.field_errors.name)}
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="patient-cpf">{"CPF"}</label>
                    <input
                        type="text"
                        id="patient-cpf"
                        placeholder="000.000.000-00"
                        value={props.draft.cpf.clone()}
                        oninput={props.on_cpf_input.clone()}
                        disabled={props.saving}
                    />
                    {field_error(&props.field_errors.cpf)}
                </div>
                <div class="form-group">
                    <label for="patient-phone">{"Phone"}</label>
                    <input
                        type="text"
                        id="patient-phone"
                        placeholder="(00) 00000-0000"
                        value={props.draft.phone.clone()}
                        oninput={props.on_phone_input.clone()}
                        disabled={props.saving}
                    />
                    {field_error(&props.field_errors.phone)}
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="patient-birth-date">{"Birth date"}</label>
                    <input
                        type="date"
                        id="patient-birth-date"
                        value={props.draft.birth_date.clone()}
                        onchange={props.on_birth_date_change.clone()}
                        disabled={props.saving}
                    />
                </div>
                <div class="form-group">
                    <label for="patient-email">{"Email"}</label>
                    <input
                        type="email"
                        id="patient-email"
                        value={props.draft.email.clone()}
                        onchange={props.on_email_change.clone()}
                        disabled={props.saving}
                    />
                </div>
            </div>
            <div class="form-group">
                <label for="patient-notes">{"Notes"}</label>
                <input
                    type="text"
                    id="patient-notes"
                    value={props.draft.notes.clone()}
                    onchange={props.on_notes_change.clone()}
                    disabled={props.saving}
                />
            </div>
            <button type="submit" class="btn btn-primary" disabled={props.saving}>
                {if props.saving { "Saving..." } else { "Save patient" }}
            </button>
        </form>
    }
}
