use serde::Serialize;

/// Declarative dialog description. The renderer owns presentation; this type
/// only states what the dialog says and which actions it offers.
#[derive(Debug, Clone, Serialize)]
pub struct Modal {
    pub title: String,
    pub body: String,
    pub buttons: Vec<ModalButton>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModalButton {
    pub label: String,
    pub primary: bool,
    /// External target opened in a new context; such buttons always close
    /// the dialog after activation.
    pub link: Option<String>,
    pub closes: bool,
}

impl Modal {
    /// A dialog with no configured buttons gets a single primary OK button.
    pub fn new(title: impl Into<String>, body: impl Into<String>, buttons: Vec<ModalButton>) -> Self {
        let buttons = if buttons.is_empty() {
            vec![ModalButton {
                label: "OK".to_string(),
                primary: true,
                link: None,
                closes: true,
            }]
        } else {
            buttons
        };
        Modal {
            title: title.into(),
            body: body.into(),
            buttons,
        }
    }
}

impl ModalButton {
    pub fn action(label: impl Into<String>, primary: bool) -> Self {
        ModalButton {
            label: label.into(),
            primary,
            link: None,
            closes: true,
        }
    }

    pub fn external(label: impl Into<String>, href: impl Into<String>) -> Self {
        ModalButton {
            label: label.into(),
            primary: true,
            link: Some(href.into()),
            closes: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Modal, ModalButton};

    #[test]
    fn empty_buttons_default_to_ok() {
        let modal = Modal::new("Alert", "Something happened.", Vec::new());
        assert_eq!(modal.buttons.len(), 1);
        assert_eq!(modal.buttons[0].label, "OK");
        assert!(modal.buttons[0].primary);
        assert!(modal.buttons[0].closes);
    }

    #[test]
    fn external_button_carries_link() {
        let modal = Modal::new(
            "External Link",
            "Leaving the site.",
            vec![
                ModalButton::external("Continue", "https://example.com"),
                ModalButton::action("Close", false),
            ],
        );
        assert_eq!(modal.buttons[0].link.as_deref(), Some("https://example.com"));
        assert!(modal.buttons[1].link.is_none());
    }
}
