use super::record::TableEntity;

/// One summary card above a list table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub label: String,
    pub value: usize,
}

/// Summary counts derived from the current record collection.
///
/// Always recomputed in full from the records; never updated incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metrics {
    pub total_label: &'static str,
    pub total: usize,
    pub by_status: Vec<(&'static str, usize)>,
    pub extra: Vec<MetricCard>,
}

impl Metrics {
    /// Counts records per vocabulary value by exact string match. Records
    /// with an unrecognised status only contribute to the total.
    pub fn by_status<R: TableEntity>(records: &[R]) -> Self {
        let by_status = R::vocabulary()
            .labels()
            .map(|label| {
                let count = records.iter().filter(|r| r.status() == label).count();
                (label, count)
            })
            .collect();

        Self {
            total_label: R::TOTAL_LABEL,
            total: records.len(),
            by_status,
            extra: Vec::new(),
        }
    }

    pub fn with_extra(mut self, label: impl Into<String>, value: usize) -> Self {
        self.extra.push(MetricCard {
            label: label.into(),
            value,
        });
        self
    }

    pub fn count(&self, status: &str) -> usize {
        self.by_status
            .iter()
            .find(|(label, _)| *label == status)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Cards in display order: total, one per status, then extras.
    pub fn cards(&self) -> Vec<MetricCard> {
        let mut cards = Vec::with_capacity(1 + self.by_status.len() + self.extra.len());
        cards.push(MetricCard {
            label: self.total_label.to_string(),
            value: self.total,
        });
        cards.extend(self.by_status.iter().map(|(label, value)| MetricCard {
            label: (*label).to_string(),
            value: *value,
        }));
        cards.extend(self.extra.iter().cloned());
        cards
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::a001_guest_request::aggregate::GuestRequest;
    use crate::shared::crud::TableEntity;
    use crate::domain::a003_maintenance_ticket::aggregate::MaintenanceTicket;

    fn request(status: &str) -> GuestRequest {
        GuestRequest {
            status: status.to_string(),
            ..GuestRequest::default()
        }
    }

    #[test]
    fn test_counts_by_exact_status() {
        let records = vec![
            request("Assigned"),
            request("In Progress"),
            request("In Progress"),
            request("completed"),
            request("Completed"),
        ];
        let metrics = GuestRequest::metrics(&records);

        assert_eq!(metrics.total, 5);
        assert_eq!(metrics.count("Assigned"), 1);
        assert_eq!(metrics.count("In Progress"), 2);
        // "completed" is not an exact match
        assert_eq!(metrics.count("Completed"), 1);
    }

    #[test]
    fn test_status_counts_never_exceed_total() {
        let records = vec![request("Assigned"), request("Unknown"), request("")];
        let metrics = GuestRequest::metrics(&records);
        let counted: usize = metrics.by_status.iter().map(|(_, c)| c).sum();

        assert_eq!(metrics.total, records.len());
        assert_eq!(counted, 1);
    }

    #[test]
    fn test_empty_collection_has_all_zero_counts() {
        let metrics = MaintenanceTicket::metrics(&[]);
        assert_eq!(metrics.total, 0);
        assert!(metrics.by_status.iter().all(|(_, c)| *c == 0));
        assert_eq!(metrics.cards().len(), 5);
    }

    #[test]
    fn test_recomputing_is_stable() {
        let records = vec![request("Assigned"), request("Completed")];
        assert_eq!(
            GuestRequest::metrics(&records),
            GuestRequest::metrics(&records)
        );
    }
}
