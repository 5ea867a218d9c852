//! Printable record of one generation round.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::GenerationRequest;

/// One round of generated names together with the inputs that produced it.
///
/// Printed as JSON with `--json`. Never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// UUIDv7, time-ordered.
    pub id: String,
    pub description: String,
    pub industry: Option<String>,
    pub style: Option<String>,
    pub names: Vec<String>,
    pub generated_count: usize,
    pub created_at: DateTime<Utc>,
}

impl GenerationRecord {
    pub fn new(request: &GenerationRequest, names: Vec<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            description: request.description.clone(),
            industry: request.industry.clone(),
            style: request.style.clone(),
            generated_count: names.len(),
            names,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_shape() {
        let request = GenerationRequest::new("budgeting app", Some("finance".into()), None);
        let record = GenerationRecord::new(&request, vec!["Payly".into(), "Nova".into()]);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["description"], "budgeting app");
        assert_eq!(json["industry"], "finance");
        assert!(json["style"].is_null());
        assert_eq!(json["generated_count"], 2);
        assert_eq!(json["names"][1], "Nova");
        assert!(Uuid::parse_str(json["id"].as_str().unwrap()).is_ok());
        assert!(json["created_at"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_record_ids_differ() {
        let request = GenerationRequest::new("x", None, None);
        let a = GenerationRecord::new(&request, Vec::new());
        let b = GenerationRecord::new(&request, Vec::new());
        assert_ne!(a.id, b.id);
        assert_eq!(a.generated_count, 0);
    }
}
