#![allow(non_snake_case)]

use dioxus::{logger::tracing::{info, warn}, prelude::*};

use crate::{
  components::{icon::{Icon, IconName}, toast::notify},
  utils::{lead::{LeadField, LeadForm}, notify::ToastQueue},
};

#[component]
pub fn ContactForm(mut lead: Signal<LeadForm>, toasts: Signal<ToastQueue>) -> Element {
  let message = lead.read().message.clone();
  let message_label = LeadField::Message.label();

  rsx! {
    form {
      id: "lead-form",
      class: "lead-form",
      onsubmit: move |evt: FormEvent| {
        evt.prevent_default();
        // the lead stays in the browser; only the fact of submission is logged
        if lead.read().is_empty() {
          warn!("lead form submitted without any fields filled in");
        } else {
          info!("lead form submitted");
        }
        let notification = lead.write().submit();
        notify(toasts, notification);
      },
      div {
        class: "form-row",
        LeadInput { lead, field: LeadField::Company },
        LeadInput { lead, field: LeadField::Contact }
      },
      div {
        class: "form-row",
        LeadInput { lead, field: LeadField::Phone },
        LeadInput { lead, field: LeadField::Email }
      },
      div {
        class: "form-group",
        label { class: "form-label", r#for: LeadField::Message.id(), "{message_label}" },
        textarea {
          class: "form-input",
          id: LeadField::Message.id(),
          name: LeadField::Message.id(),
          required: LeadField::Message.is_required(),
          rows: "5",
          placeholder: LeadField::Message.placeholder(),
          value: "{message}",
          oninput: move |evt: FormEvent| lead.write().set(LeadField::Message, evt.value())
        }
      },
      button {
        r#type: "submit",
        class: "button button-primary button-wide",
        Icon { name: IconName::Send },
        "Отправить заявку"
      }
    }
  }
}

#[component]
fn LeadInput(mut lead: Signal<LeadForm>, field: LeadField) -> Element {
  let value = lead.read().get(field).to_string();
  let label = field.label();

  rsx! {
    div {
      class: "form-group",
      label { class: "form-label", r#for: field.id(), "{label}" },
      input {
        class: "form-input",
        id: field.id(),
        name: field.id(),
        r#type: field.input_type(),
        required: field.is_required(),
        placeholder: field.placeholder(),
        value: "{value}",
        oninput: move |evt: FormEvent| lead.write().set(field, evt.value())
      }
    }
  }
}
