//! Client (customer company) model and DTOs.

use prootly_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::double_option;
use crate::table::{apply_fields, Patch, Record};

/// A client company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: RecordId,
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new client.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClient {
    #[validate(length(min = 1, message = "companyName must not be empty"))]
    pub company_name: String,
    #[validate(length(min = 1, message = "contactPerson must not be empty"))]
    pub contact_person: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub phone: Option<String>,
    /// Defaults to `active` if omitted.
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing client. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClient {
    #[validate(length(min = 1, message = "companyName must not be empty"))]
    pub company_name: Option<String>,
    pub contact_person: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}

impl Record for Client {
    const ENTITY: &'static str = "Client";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

impl Patch<Client> for UpdateClient {
    fn apply(self, client: &mut Client) {
        let patch = self;
        apply_fields!(patch => client {
            company_name,
            contact_person,
            email,
            phone,
            status,
            notes,
        });
    }
}
