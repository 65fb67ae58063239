#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::components::icon::{Icon, IconName};

pub const BRAND: &str = "МЕТАЛЛОПРОКАТ";

/// Heading shared by the catalog, price and contact sections.
#[component]
pub fn SectionHeading(icon: IconName, title: String, subtitle: String) -> Element {
  rsx! {
    div {
      class: "section-heading",
      h2 {
        class: "section-title",
        Icon { name: icon, class: "section-icon" }
        "{title}"
      }
      p { class: "section-subtitle", "{subtitle}" }
    }
  }
}

#[component]
pub fn Footer() -> Element {
  rsx!{
    footer {
      div {
        class: "footer-container",
        div {
          class: "footer-brand",
          Icon { name: IconName::Factory },
          span { class: "footer-brand-name", "{BRAND}" }
        },
        p { class: "footer-tagline", "Качественная металлопродукция для вашего бизнеса" }
      }
    }
  }
}
