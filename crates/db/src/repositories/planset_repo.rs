//! Repository for planset intake forms.

use prootly_core::types::new_record_id;

use crate::models::planset::{CreatePlanset, Planset, UpdatePlanset};
use crate::store::MemStore;

pub struct PlansetRepo;

impl PlansetRepo {
    /// Insert a planset. Boolean flags default to `false` and the file
    /// reference lists to empty.
    pub fn create(store: &MemStore, input: CreatePlanset) -> Planset {
        let now = store.now();
        store.plansets.insert(Planset {
            id: new_record_id(),
            project_id: input.project_id,
            timezone: input.timezone,
            received_time: input.received_time,
            portal_name: input.portal_name,
            company_name: input.company_name,
            customer_name: input.customer_name,
            customer_email: input.customer_email,
            customer_phone: input.customer_phone,
            site_address: input.site_address,
            city: input.city,
            state: input.state,
            coordinates: input.coordinates,
            apn_number: input.apn_number,
            authority_having_jurisdiction: input.authority_having_jurisdiction,
            utility_name: input.utility_name,
            mount_type: input.mount_type,
            add_on_equipments: input.add_on_equipments,
            governing_codes: input.governing_codes,
            property_type: input.property_type,
            job_type: input.job_type,
            new_construction: input.new_construction.unwrap_or(false),
            module_manufacturer: input.module_manufacturer,
            module_model_no: input.module_model_no,
            module_quantity: input.module_quantity,
            inverter_manufacturer: input.inverter_manufacturer,
            inverter_model_no: input.inverter_model_no,
            inverter_quantity: input.inverter_quantity,
            existing_solar_system: input.existing_solar_system.unwrap_or(false),
            proposal_design_files: input.proposal_design_files.unwrap_or_default(),
            sitesurvey_attachments: input.sitesurvey_attachments.unwrap_or_default(),
            additional_comments: input.additional_comments,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn find_by_id(store: &MemStore, id: &str) -> Option<Planset> {
        store.plansets.get(id)
    }

    /// Newest first.
    pub fn list(store: &MemStore) -> Vec<Planset> {
        store.plansets.list_recent()
    }

    /// Plansets of one project, newest first.
    pub fn list_by_project(store: &MemStore, project_id: &str) -> Vec<Planset> {
        store.plansets.filter_recent(|p| p.project_id == project_id)
    }

    pub fn update(store: &MemStore, id: &str, input: UpdatePlanset) -> Option<Planset> {
        store.plansets.update(id, input, store.now())
    }

    pub fn delete(store: &MemStore, id: &str) -> bool {
        store.plansets.remove(id)
    }
}
