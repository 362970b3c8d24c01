//! # Customers
//!
//! A customer is identified by the pair (company name, project name).

use crate::error::DecodeError;
use crate::model::{required_i64, required_str, JsonObject, Model};
use serde::Serialize;

/// A registered customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: i64,
    pub company_name: String,
    pub project_name: String,
}

impl Model for Customer {
    const NAME: &'static str = "Customer";

    fn from_json(object: &JsonObject) -> Result<Self, DecodeError> {
        Ok(Self {
            id: required_i64(object, Self::NAME, "id")?,
            company_name: required_str(object, Self::NAME, "company_name")?,
            project_name: required_str(object, Self::NAME, "project_name")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_customer() {
        let customer = Customer::from_value(&json!({
            "id": 7,
            "company_name": "Acme",
            "project_name": "rockets"
        }))
        .unwrap();

        assert_eq!(
            customer,
            Customer {
                id: 7,
                company_name: "Acme".into(),
                project_name: "rockets".into(),
            }
        );
    }

    #[test]
    fn test_string_id_rejected() {
        let err = Customer::from_value(&json!({
            "id": "7",
            "company_name": "Acme",
            "project_name": "rockets"
        }))
        .unwrap_err();
        assert_eq!(err, DecodeError::missing("Customer", "id"));
    }
}
