use serde::Serialize;

use crate::domain::modal::{Modal, ModalButton};

/// Badge attached to a comment bridged in from an external platform.
#[derive(Debug, Clone, Serialize)]
pub struct BridgeBadge {
    pub label: String,
    pub href: String,
    pub tooltip: String,
}

const BRIDGE_SOURCE: &str = "wasteof";
const BRIDGE_HOME: &str = "https://wasteof.money";
const BRIDGE_TOOLTIP: &str = "This comment has been bridged from a third party \
platform. Replies posted on this blog cannot be seen by users on the third \
party platform.";

/// Badge for a comment's `source` field, if it names a bridged platform.
pub fn bridge_badge(source: Option<&str>) -> Option<BridgeBadge> {
    match source {
        Some(value) if value == BRIDGE_SOURCE => Some(BridgeBadge {
            label: "From wasteof.money".to_string(),
            href: BRIDGE_HOME.to_string(),
            tooltip: BRIDGE_TOOLTIP.to_string(),
        }),
        _ => None,
    }
}

/// What activating an external-platform link should do.
#[derive(Debug, Clone)]
pub enum LinkAction {
    /// Pointer devices navigate directly; the tooltip already explained the
    /// destination.
    Navigate(String),
    /// Touch devices get an interstitial dialog instead of direct navigation.
    Intercept(Modal),
    /// No modal host available: fall back to a plain confirm before opening.
    ConfirmFallback { prompt: String, href: String },
}

pub fn badge_activation(badge: &BridgeBadge, touch_device: bool, modal_available: bool) -> LinkAction {
    if !touch_device {
        return LinkAction::Navigate(badge.href.clone());
    }
    let body = "This comment has been bridged from a third party platform, wasteof.money.";
    if modal_available {
        LinkAction::Intercept(Modal::new(
            "External Link",
            body,
            vec![
                ModalButton::external("View on wasteof.money", badge.href.clone()),
                ModalButton::action("Close", false),
            ],
        ))
    } else {
        LinkAction::ConfirmFallback {
            prompt: format!("{body} Continue to site?"),
            href: badge.href.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LinkAction, badge_activation, bridge_badge};

    #[test]
    fn only_bridged_sources_get_a_badge() {
        assert!(bridge_badge(Some("wasteof")).is_some());
        assert!(bridge_badge(Some("native")).is_none());
        assert!(bridge_badge(None).is_none());
    }

    #[test]
    fn pointer_devices_navigate_directly() {
        let badge = bridge_badge(Some("wasteof")).unwrap();
        match badge_activation(&badge, false, true) {
            LinkAction::Navigate(href) => assert_eq!(href, "https://wasteof.money"),
            other => panic!("expected direct navigation, got {other:?}"),
        }
    }

    #[test]
    fn touch_devices_get_interstitial_modal() {
        let badge = bridge_badge(Some("wasteof")).unwrap();
        match badge_activation(&badge, true, true) {
            LinkAction::Intercept(modal) => {
                assert_eq!(modal.title, "External Link");
                assert_eq!(modal.buttons.len(), 2);
                assert!(modal.buttons[0].link.is_some());
            }
            other => panic!("expected interception, got {other:?}"),
        }
    }

    #[test]
    fn missing_modal_host_falls_back_to_confirm() {
        let badge = bridge_badge(Some("wasteof")).unwrap();
        match badge_activation(&badge, true, false) {
            LinkAction::ConfirmFallback { prompt, href } => {
                assert!(prompt.ends_with("Continue to site?"));
                assert_eq!(href, "https://wasteof.money");
            }
            other => panic!("expected confirm fallback, got {other:?}"),
        }
    }
}
