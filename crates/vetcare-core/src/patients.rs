//! Patient quick-access records and search.

use serde::{Deserialize, Serialize};

/// A patient chart summary: signalment, known allergies, and the most
/// recent lab result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub pet_name: String,
    pub breed: String,
    pub age: String,
    pub weight: String,
    pub allergies: Vec<String>,
    pub last_lab_result: String,
    pub lab_date: String,
}

impl Patient {
    /// Case-insensitive substring match on pet name or breed.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.pet_name.to_lowercase().contains(&query)
            || self.breed.to_lowercase().contains(&query)
    }
}

/// Filter a patient list the way the quick-access search box does.
pub fn filter_patients<'a>(patients: &'a [Patient], query: &str) -> Vec<&'a Patient> {
    patients.iter().filter(|p| p.matches(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(pet: &str, breed: &str) -> Patient {
        Patient {
            id: "1".to_string(),
            pet_name: pet.to_string(),
            breed: breed.to_string(),
            age: "5 years".to_string(),
            weight: "32 kg".to_string(),
            allergies: vec!["Penicillin".to_string()],
            last_lab_result: "Normal CBC".to_string(),
            lab_date: "Jan 15 2026".to_string(),
        }
    }

    #[test]
    fn matches_pet_name_case_insensitively() {
        let charts = vec![patient("Max", "Golden Retriever")];
        assert_eq!(filter_patients(&charts, "max").len(), 1);
        assert_eq!(filter_patients(&charts, "MAX").len(), 1);
        assert_eq!(filter_patients(&charts, "bella").len(), 0);
    }

    #[test]
    fn matches_breed_substring() {
        let charts = vec![
            patient("Max", "Golden Retriever"),
            patient("Bella", "Persian Cat"),
        ];
        let hits = filter_patients(&charts, "retriever");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].pet_name, "Max");
    }

    #[test]
    fn empty_query_matches_everything() {
        let charts = vec![
            patient("Max", "Golden Retriever"),
            patient("Bella", "Persian Cat"),
        ];
        assert_eq!(filter_patients(&charts, "").len(), 2);
    }
}
