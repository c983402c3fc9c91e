//! Action dispatcher for the delegated click listener on a table body.

use super::record::RecordId;
use super::rows::ActionKind;

/// Row-level interaction decoded from the clicked element's attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCommand {
    pub kind: ActionKind,
    pub key: String,
    pub label: Option<String>,
}

impl RowCommand {
    pub fn record_id(&self) -> Option<RecordId> {
        RecordId::parse(&self.key)
    }

    /// Text of the confirmation prompt shown before a delete.
    pub fn confirm_prompt(&self, noun: &str) -> String {
        match self.label.as_deref().filter(|l| !l.trim().is_empty()) {
            Some(label) => format!("Delete {} {}? This cannot be undone.", noun, label),
            None => format!("Delete this {}? This cannot be undone.", noun),
        }
    }
}

/// Decodes `data-action`, `data-id` and `data-label` of a clicked element.
///
/// Returns `None` for clicks on anything that is not an action button, so
/// clicks on plain cells are no-ops.
pub fn dispatch(
    action: Option<&str>,
    key: Option<&str>,
    label: Option<&str>,
) -> Option<RowCommand> {
    let kind = ActionKind::from_attr(action?)?;
    let key = key.map(str::trim).filter(|k| !k.is_empty())?;
    Some(RowCommand {
        kind,
        key: key.to_string(),
        label: label.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_edit_and_delete() {
        let edit = dispatch(Some("edit"), Some("4"), None).unwrap();
        assert_eq!(edit.kind, ActionKind::Edit);
        assert_eq!(edit.record_id(), Some(RecordId(4)));

        let delete = dispatch(Some("delete"), Some("4"), Some("MT-2026-011")).unwrap();
        assert_eq!(delete.kind, ActionKind::Delete);
        assert_eq!(
            delete.confirm_prompt("ticket"),
            "Delete ticket MT-2026-011? This cannot be undone."
        );
    }

    #[test]
    fn test_clicks_without_action_are_ignored() {
        assert!(dispatch(None, None, None).is_none());
        assert!(dispatch(None, Some("3"), None).is_none());
        assert!(dispatch(Some("archive"), Some("3"), None).is_none());
        assert!(dispatch(Some("edit"), None, None).is_none());
        assert!(dispatch(Some("edit"), Some("  "), None).is_none());
    }

    #[test]
    fn test_prompt_without_label() {
        let cmd = dispatch(Some("delete"), Some("2"), Some("")).unwrap();
        assert_eq!(
            cmd.confirm_prompt("request"),
            "Delete this request? This cannot be undone."
        );
    }

    #[test]
    fn test_non_numeric_key_has_no_record_id() {
        let cmd = dispatch(Some("toggle"), Some("silva.nimal"), None).unwrap();
        assert_eq!(cmd.kind, ActionKind::Toggle);
        assert_eq!(cmd.record_id(), None);
    }
}
