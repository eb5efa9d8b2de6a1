// Fixture records for form-filling scenarios
//
// Loaded once from the flat data file embedded in the crate. The tables are
// immutable after startup; a malformed data file is a startup failure.

use std::sync::LazyLock;

use serde::Deserialize;

/// Text Box form entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TextBoxEntry {
    pub full_name: String,
    pub email: String,
    pub current_address: String,
    pub permanent_address: String,
}

/// Web Tables registration record. Age and salary stay strings because they
/// are typed into text inputs as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: String,
    pub salary: String,
    pub department: String,
}

/// Practice Form entry.
#[derive(Debug, Clone, Deserialize)]
pub struct PracticeFormRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub mobile: String,
    pub date_of_birth: String,
    pub subjects: Vec<String>,
    pub hobbies: Vec<String>,
    pub current_address: String,
    pub state: String,
    pub city: String,
}

#[derive(Debug, Deserialize)]
pub struct Records {
    pub text_box: TextBoxEntry,
    pub registrations: Vec<RegistrationRecord>,
    pub practice_form: PracticeFormRecord,
}

static RECORDS: LazyLock<Records> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/records.json"))
        .expect("data/records.json must parse; fix the data file")
});

/// The suite's fixture records.
pub fn records() -> &'static Records {
    &RECORDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_file_parses() {
        let records = records();
        assert!(!records.text_box.full_name.is_empty());
        assert!(!records.registrations.is_empty());
        assert!(records.practice_form.email.contains('@'));
    }

    #[test]
    fn registration_emails_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for record in &records().registrations {
            assert!(seen.insert(&record.email), "duplicate fixture email");
        }
    }
}
