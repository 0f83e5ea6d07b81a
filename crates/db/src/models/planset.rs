//! Planset intake model and DTOs.
//!
//! A planset is the site-survey / design-request form submitted for one
//! project. Most fields are free text copied from the intake wizard.

use prootly_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::double_option;
use crate::table::{apply_fields, Patch, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planset {
    pub id: RecordId,
    pub project_id: RecordId,

    // Intake metadata
    pub timezone: Option<String>,
    pub received_time: Option<String>,
    pub portal_name: Option<String>,
    pub company_name: String,

    // Homeowner
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub site_address: String,
    pub city: String,
    pub state: String,
    /// `"lat,lng"` as picked on the map.
    pub coordinates: Option<String>,

    // Permitting
    pub apn_number: Option<String>,
    pub authority_having_jurisdiction: Option<String>,
    pub utility_name: Option<String>,
    pub mount_type: String,
    pub add_on_equipments: Option<String>,
    pub governing_codes: Option<String>,

    /// `residential` or `commercial`.
    pub property_type: String,
    /// `pv`, `pv+battery` or `battery`.
    pub job_type: String,
    pub new_construction: bool,

    // Equipment
    pub module_manufacturer: Option<String>,
    pub module_model_no: Option<String>,
    pub module_quantity: Option<i32>,
    pub inverter_manufacturer: Option<String>,
    pub inverter_model_no: Option<String>,
    pub inverter_quantity: Option<i32>,
    pub existing_solar_system: bool,

    // Uploaded file references
    pub proposal_design_files: Vec<String>,
    pub sitesurvey_attachments: Vec<String>,
    pub additional_comments: Option<String>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting a new planset.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanset {
    #[validate(length(min = 1, message = "projectId must not be empty"))]
    pub project_id: RecordId,
    pub timezone: Option<String>,
    pub received_time: Option<String>,
    pub portal_name: Option<String>,
    #[validate(length(min = 1, message = "companyName must not be empty"))]
    pub company_name: String,
    #[validate(length(min = 1, message = "customerName must not be empty"))]
    pub customer_name: String,
    #[validate(email(message = "customerEmail must be a valid address"))]
    pub customer_email: String,
    pub customer_phone: Option<String>,
    #[validate(length(min = 1, message = "siteAddress must not be empty"))]
    pub site_address: String,
    #[validate(length(min = 1, message = "city must not be empty"))]
    pub city: String,
    #[validate(length(min = 1, message = "state must not be empty"))]
    pub state: String,
    pub coordinates: Option<String>,
    pub apn_number: Option<String>,
    pub authority_having_jurisdiction: Option<String>,
    pub utility_name: Option<String>,
    #[validate(length(min = 1, message = "mountType must not be empty"))]
    pub mount_type: String,
    pub add_on_equipments: Option<String>,
    pub governing_codes: Option<String>,
    #[validate(length(min = 1, message = "propertyType must not be empty"))]
    pub property_type: String,
    #[validate(length(min = 1, message = "jobType must not be empty"))]
    pub job_type: String,
    /// Defaults to `false`.
    pub new_construction: Option<bool>,
    pub module_manufacturer: Option<String>,
    pub module_model_no: Option<String>,
    #[validate(range(min = 0, message = "moduleQuantity must not be negative"))]
    pub module_quantity: Option<i32>,
    pub inverter_manufacturer: Option<String>,
    pub inverter_model_no: Option<String>,
    #[validate(range(min = 0, message = "inverterQuantity must not be negative"))]
    pub inverter_quantity: Option<i32>,
    /// Defaults to `false`.
    pub existing_solar_system: Option<bool>,
    /// Defaults to an empty list.
    pub proposal_design_files: Option<Vec<String>>,
    /// Defaults to an empty list.
    pub sitesurvey_attachments: Option<Vec<String>>,
    pub additional_comments: Option<String>,
}

/// DTO for editing a planset. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanset {
    pub project_id: Option<RecordId>,
    #[serde(default, deserialize_with = "double_option")]
    pub timezone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub received_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub portal_name: Option<Option<String>>,
    pub company_name: Option<String>,
    pub customer_name: Option<String>,
    #[validate(email(message = "customerEmail must be a valid address"))]
    pub customer_email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub customer_phone: Option<Option<String>>,
    pub site_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub coordinates: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub apn_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub authority_having_jurisdiction: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub utility_name: Option<Option<String>>,
    pub mount_type: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub add_on_equipments: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub governing_codes: Option<Option<String>>,
    pub property_type: Option<String>,
    pub job_type: Option<String>,
    pub new_construction: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub module_manufacturer: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub module_model_no: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub module_quantity: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub inverter_manufacturer: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub inverter_model_no: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub inverter_quantity: Option<Option<i32>>,
    pub existing_solar_system: Option<bool>,
    pub proposal_design_files: Option<Vec<String>>,
    pub sitesurvey_attachments: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub additional_comments: Option<Option<String>>,
}

impl Record for Planset {
    const ENTITY: &'static str = "Planset";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn updated_at(&self) -> Option<Timestamp> {
        Some(self.updated_at)
    }

    fn touch(&mut self, at: Timestamp) {
        self.updated_at = at;
    }
}

impl Patch<Planset> for UpdatePlanset {
    fn apply(self, planset: &mut Planset) {
        let patch = self;
        apply_fields!(patch => planset {
            project_id,
            timezone,
            received_time,
            portal_name,
            company_name,
            customer_name,
            customer_email,
            customer_phone,
            site_address,
            city,
            state,
            coordinates,
            apn_number,
            authority_having_jurisdiction,
            utility_name,
            mount_type,
            add_on_equipments,
            governing_codes,
            property_type,
            job_type,
            new_construction,
            module_manufacturer,
            module_model_no,
            module_quantity,
            inverter_manufacturer,
            inverter_model_no,
            inverter_quantity,
            existing_solar_system,
            proposal_design_files,
            sitesurvey_attachments,
            additional_comments,
        });
    }
}
