use super::email::EmailId;

/// Which email is open and which one the cursor rests on. Both hold ids only
/// and may point at emails that no longer exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub selected: Option<EmailId>,
    pub hovered: Option<EmailId>,
}

impl Selection {
    pub fn is_selected(&self, id: &EmailId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn is_hovered(&self, id: &EmailId) -> bool {
        self.hovered.as_ref() == Some(id)
    }
}
