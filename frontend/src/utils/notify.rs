#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
  Error,
  Info,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Notification {
  pub kind: NotificationKind,
  pub title: &'static str,
  pub description: &'static str,
}

pub const CATALOG_LOAD_FAILED: Notification = Notification {
  kind: NotificationKind::Error,
  title: "Ошибка загрузки",
  description: "Не удалось загрузить каталог",
};

pub const LEAD_ACCEPTED: Notification = Notification {
  kind: NotificationKind::Info,
  title: "Заявка отправлена",
  description: "Мы свяжемся с вами в ближайшее время",
};

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
  pub id: u64,
  pub notification: Notification,
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastQueue {
  next_id: u64,
  toasts: Vec<Toast>,
}

impl ToastQueue {
  pub fn push(&mut self, notification: Notification) -> u64 {
    let id = self.next_id;
    self.next_id += 1;
    self.toasts.push(Toast { id, notification });
    id
  }

  /// Returns false when the toast was already gone (closed by hand before the timer fired).
  pub fn dismiss(&mut self, id: u64) -> bool {
    let before = self.toasts.len();
    self.toasts.retain(|t| t.id != id);
    self.toasts.len() != before
  }

  pub fn toasts(&self) -> &[Toast] {
    &self.toasts
  }
}
