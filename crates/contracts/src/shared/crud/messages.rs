//! User-facing message templates shared by every CRUD module.

use super::record::CrudEntity;
use super::store::StoreError;

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn load_failed<R: CrudEntity>(err: &StoreError) -> String {
    format!("Error loading {}: {}", R::PLURAL, err)
}

pub fn invalid_identifier<R: CrudEntity>() -> String {
    format!("Please enter a valid {}.", R::IDENTIFIER_LABEL)
}

pub fn duplicate<R: CrudEntity>() -> String {
    format!(
        "{} already exists. Please use a unique {}.",
        capitalize(R::IDENTIFIER_LABEL),
        R::IDENTIFIER_LABEL
    )
}

pub fn not_found<R: CrudEntity>() -> String {
    format!("{} not found.", capitalize(R::NOUN))
}

pub fn added<R: CrudEntity>(identifier: &str) -> String {
    format!("Added {} {}.", R::NOUN, identifier)
}

pub fn updated<R: CrudEntity>(identifier: &str) -> String {
    format!("Updated {} {}.", R::NOUN, identifier)
}

pub fn deleted<R: CrudEntity>(identifier: &str) -> String {
    format!("Deleted {} {}.", R::NOUN, identifier)
}

pub fn add_rejected<R: CrudEntity>() -> String {
    format!("Failed to add {}.", R::NOUN)
}

pub fn update_rejected<R: CrudEntity>() -> String {
    format!("Failed to update {}.", R::NOUN)
}

pub fn add_error<R: CrudEntity>() -> String {
    format!("Error adding {}.", R::NOUN)
}

pub fn update_error<R: CrudEntity>() -> String {
    format!("Error updating {}.", R::NOUN)
}

pub fn delete_error<R: CrudEntity>() -> String {
    format!("Error deleting {}.", R::NOUN)
}

pub fn delete_done<R: CrudEntity>() -> String {
    format!("{} deleted successfully!", capitalize(R::NOUN))
}

pub fn lookup_error<R: CrudEntity>() -> String {
    format!("Error fetching {} details.", R::NOUN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_maintenance_ticket::aggregate::MaintenanceTicket;
    use crate::domain::a005_purchase_order::aggregate::PurchaseOrder;

    #[test]
    fn test_templates() {
        assert_eq!(
            invalid_identifier::<MaintenanceTicket>(),
            "Please enter a valid ticket ID."
        );
        assert_eq!(
            duplicate::<MaintenanceTicket>(),
            "Ticket ID already exists. Please use a unique ticket ID."
        );
        assert_eq!(not_found::<PurchaseOrder>(), "Purchase order not found.");
        assert_eq!(added::<PurchaseOrder>("PO-7"), "Added purchase order PO-7.");
    }
}
