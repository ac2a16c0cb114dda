#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
    Warning,
    Info,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Failure => "notice notice--failure",
            NoticeKind::Warning => "notice notice--warning",
            NoticeKind::Info => "notice notice--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Holds the single visible notification.
///
/// Showing a notice replaces whatever is visible. Every notice gets a fresh
/// id so a dismissal timer started for an older notice cannot remove a newer
/// one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    last_id: u64,
}

impl NoticeSlot {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn show(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.last_id += 1;
        self.current = Some(Notice {
            id: self.last_id,
            kind,
            message: message.into(),
        });
        self.last_id
    }

    /// Remove the notice with `id` if it is still the one showing.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notice_replaces_current() {
        let mut slot = NoticeSlot::default();
        slot.show(NoticeKind::Info, "first");
        slot.show(NoticeKind::Failure, "second");

        let current = slot.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.kind, NoticeKind::Failure);
    }

    #[test]
    fn test_stale_dismissal_is_ignored() {
        let mut slot = NoticeSlot::default();
        let old = slot.show(NoticeKind::Success, "saved");
        let new = slot.show(NoticeKind::Warning, "careful");

        assert!(!slot.dismiss(old));
        assert_eq!(slot.current().unwrap().message, "careful");

        assert!(slot.dismiss(new));
        assert!(slot.current().is_none());
        assert!(!slot.dismiss(new));
    }
}
