use crate::models::JournalEntry;

/// Overlay state of the dashboard, one variant per visible popup.
///
/// Edit always carries the entry being edited, so "clear the current
/// entry" and "close the popup" cannot drift apart; likewise the delete
/// confirmation always carries the captured target id.
#[derive(Clone, Debug, PartialEq, Default)]
pub(crate) enum EntryDialog {
    #[default]
    Closed,
    Create,
    Edit(JournalEntry),
    ConfirmDelete(String),
}

impl EntryDialog {
    /// The "create memory" button doubles as the form's close control.
    /// Closing an edit form drops the edited entry with it. The delete
    /// confirmation is modal; the toggle does nothing while it is up.
    pub fn toggle_form(self) -> Self {
        match self {
            Self::Closed => Self::Create,
            Self::Create | Self::Edit(_) => Self::Closed,
            other @ Self::ConfirmDelete(_) => other,
        }
    }

    pub fn open_edit(self, entry: JournalEntry) -> Self {
        match self {
            Self::ConfirmDelete(_) => self,
            _ => Self::Edit(entry),
        }
    }

    pub fn request_delete(self, id: String) -> Self {
        match self {
            Self::Closed => Self::ConfirmDelete(id),
            other => other,
        }
    }

    /// Close/cancel, and the success path of every submit.
    pub fn close(self) -> Self {
        Self::Closed
    }

    pub fn form_open(&self) -> bool {
        matches!(self, Self::Create | Self::Edit(_))
    }

    pub fn editing_entry(&self) -> Option<&JournalEntry> {
        match self {
            Self::Edit(e) => Some(e),
            _ => None,
        }
    }

    /// Id the form submit must target: `Some` updates in place, `None`
    /// creates a new entry.
    pub fn submit_target(&self) -> Option<&str> {
        self.editing_entry().map(|e| e.id.as_str())
    }

    pub fn delete_target(&self) -> Option<&str> {
        match self {
            Self::ConfirmDelete(id) => Some(id.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> JournalEntry {
        JournalEntry {
            id: id.to_string(),
            title: "t".to_string(),
            content: "c".to_string(),
            special_link: None,
            image: None,
            date_created: "2024-01-05T23:00:00Z".to_string(),
        }
    }

    #[test]
    fn toggling_create_twice_returns_to_initial_state() {
        let d = EntryDialog::Closed.toggle_form().toggle_form();
        assert_eq!(d, EntryDialog::Closed);
        assert!(d.editing_entry().is_none());
        assert!(!d.form_open());
    }

    #[test]
    fn closing_an_edit_form_clears_the_edited_entry() {
        let d = EntryDialog::Closed.open_edit(entry("42"));
        assert!(d.form_open());
        assert_eq!(d.submit_target(), Some("42"));

        let d = d.toggle_form();
        assert_eq!(d, EntryDialog::Closed);
        assert!(d.editing_entry().is_none());
    }

    #[test]
    fn edit_submit_targets_the_selected_entry() {
        let d = EntryDialog::Closed.open_edit(entry("abc"));
        assert_eq!(d.submit_target(), Some("abc"));

        // Create mode never targets an existing id.
        assert_eq!(EntryDialog::Create.submit_target(), None);
    }

    #[test]
    fn delete_request_captures_the_target_id() {
        let d = EntryDialog::Closed.request_delete("e1".to_string());
        assert_eq!(d.delete_target(), Some("e1"));

        let d = d.close();
        assert_eq!(d, EntryDialog::Closed);
        assert!(d.delete_target().is_none());
    }

    #[test]
    fn delete_confirmation_is_modal() {
        let d = EntryDialog::ConfirmDelete("e1".to_string());
        assert_eq!(d.clone().toggle_form().delete_target(), Some("e1"));
        assert_eq!(d.open_edit(entry("x")).delete_target(), Some("e1"));
    }

    #[test]
    fn delete_request_is_ignored_while_the_form_is_open() {
        let d = EntryDialog::Create.request_delete("e1".to_string());
        assert_eq!(d, EntryDialog::Create);
    }
}
