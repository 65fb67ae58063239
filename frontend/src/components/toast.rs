#![allow(non_snake_case)]

use std::time::Duration;
use dioxus::prelude::*;

use crate::utils::notify::{Notification, NotificationKind, Toast, ToastQueue};

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Shows a toast and schedules its removal. The timer task belongs to the calling
/// scope, so it goes away together with the page.
pub fn notify(mut toasts: Signal<ToastQueue>, notification: Notification) {
  let id = toasts.write().push(notification);
  spawn(async move {
    async_std::task::sleep(TOAST_LIFETIME).await;
    toasts.write().dismiss(id);
  });
}

fn toast_class(kind: NotificationKind) -> &'static str {
  match kind {
    NotificationKind::Error => "toast toast-error",
    NotificationKind::Info => "toast toast-info",
  }
}

#[component]
pub fn ToastHost(toasts: Signal<ToastQueue>) -> Element {
  let visible = toasts.read().toasts().to_vec();

  rsx! {
    div {
      class: "toast-stack",
      role: "status",
      for Toast { id, notification } in visible {
        ToastCard { key: "{id}", toasts, id, notification }
      }
    }
  }
}

#[component]
fn ToastCard(mut toasts: Signal<ToastQueue>, id: u64, notification: Notification) -> Element {
  let Notification { kind, title, description } = notification;

  rsx! {
    div {
      class: toast_class(kind),
      div {
        class: "toast-body",
        p { class: "toast-title", "{title}" }
        p { class: "toast-description", "{description}" }
      }
      button {
        r#type: "button",
        class: "toast-close",
        aria_label: "Закрыть",
        onclick: move |_evt| {
          toasts.write().dismiss(id);
        },
        "×"
      }
    }
  }
}
