//! Two-click delete buttons backed by [`store::DeleteConfirm`].

use dioxus::prelude::*;
use store::{ConfirmStep, DeleteConfirm};

use crate::client::use_ui_config;
use crate::sleep::sleep_ms;

/// Length of the confirmation window for a configured number of seconds.
pub fn confirm_window_ms(secs: u32) -> u32 {
    secs.saturating_mul(1000)
}

/// Handle returned by [`use_delete_confirm`].
pub struct DeleteConfirmHandle<K: 'static> {
    state: Signal<DeleteConfirm<K>>,
    window_ms: u32,
}

impl<K: 'static> Clone for DeleteConfirmHandle<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: 'static> Copy for DeleteConfirmHandle<K> {}

impl<K: PartialEq + Clone + 'static> DeleteConfirmHandle<K> {
    /// Register a click on `key`. Returns `true` when the delete should run.
    ///
    /// A first click arms the row and starts the expiry timer.
    pub fn click(&mut self, key: K) -> bool {
        let step = self.state.write().click(&key);
        match step {
            ConfirmStep::Confirmed => {
                tracing::debug!("delete confirmed");
                true
            }
            ConfirmStep::Armed { generation } => {
                let mut state = self.state;
                let window_ms = self.window_ms;
                tracing::debug!("delete armed for {window_ms} ms (generation {generation})");
                spawn(async move {
                    sleep_ms(window_ms).await;
                    if state.write().expire(generation) {
                        tracing::debug!("delete confirmation {generation} expired");
                    }
                });
                false
            }
        }
    }

    pub fn is_armed(&self, key: &K) -> bool {
        self.state.read().is_armed(key)
    }

    pub fn reset(&mut self) {
        self.state.write().reset();
    }
}

/// Per-page delete confirmation state, keyed by row.
pub fn use_delete_confirm<K: PartialEq + Clone + 'static>() -> DeleteConfirmHandle<K> {
    let ui = use_ui_config();
    let state = use_signal(DeleteConfirm::<K>::new);
    DeleteConfirmHandle {
        state,
        window_ms: confirm_window_ms(ui.delete_confirm_secs),
    }
}

#[component]
pub fn ConfirmDeleteButton(
    armed: bool,
    onclick: EventHandler<()>,
    #[props(default = "Delete".to_string())] label: String,
    #[props(default = "Confirm?".to_string())] confirm_label: String,
    #[props(default = "action-btn delete".to_string())] class: String,
) -> Element {
    let classes = if armed {
        format!("{class} confirm")
    } else {
        class
    };
    rsx! {
        button {
            class: "{classes}",
            onclick: move |_| onclick.call(()),
            if armed {
                "{confirm_label}"
            } else {
                "{label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    const DEFAULT_SECS: u32 = 3;

    /// Arm `key` and start its expiry timer the way the hook does.
    fn arm(confirm: &Arc<Mutex<DeleteConfirm<i64>>>, key: i64) {
        let step = confirm.lock().unwrap().click(&key);
        let ConfirmStep::Armed { generation } = step else {
            panic!("first click must arm");
        };
        let confirm = confirm.clone();
        tokio::spawn(async move {
            sleep_ms(confirm_window_ms(DEFAULT_SECS)).await;
            confirm.lock().unwrap().expire(generation);
        });
    }

    #[test]
    fn test_window_from_seconds() {
        assert_eq!(confirm_window_ms(DEFAULT_SECS), 3000);
        assert_eq!(confirm_window_ms(0), 0);
        assert_eq!(confirm_window_ms(u32::MAX), u32::MAX);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_click_inside_window_confirms() {
        let confirm = Arc::new(Mutex::new(DeleteConfirm::new()));
        arm(&confirm, 1);
        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(confirm.lock().unwrap().is_armed(&1));
        assert_eq!(confirm.lock().unwrap().click(&1), ConfirmStep::Confirmed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_after_window_rearms() {
        let confirm = Arc::new(Mutex::new(DeleteConfirm::new()));
        arm(&confirm, 1);
        tokio::time::sleep(Duration::from_millis(3001)).await;
        assert!(!confirm.lock().unwrap().is_armed(&1));
        assert!(matches!(
            confirm.lock().unwrap().click(&1),
            ConfirmStep::Armed { .. }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sleep_then_expire_disarms() {
        let mut confirm = DeleteConfirm::new();
        let ConfirmStep::Armed { generation } = confirm.click(&7) else {
            panic!("first click must arm");
        };
        let started = tokio::time::Instant::now();
        sleep_ms(confirm_window_ms(DEFAULT_SECS)).await;
        assert!(started.elapsed() >= Duration::from_millis(3000));
        assert!(confirm.expire(generation));
        assert!(!confirm.is_armed(&7));
    }
}
