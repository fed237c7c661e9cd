mod anamnesis_form;
mod anamnesis_questions;
mod patient_form;
mod patients_page;

pub use patients_page::PatientsPage;
