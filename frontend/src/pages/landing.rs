use std::rc::Rc;
use dioxus::prelude::*;
use dioxus::document;

use crate::{
  components::{
    catalog::CatalogGrid,
    contact_form::ContactForm,
    icon::{Icon, IconName},
    price_table::PriceTable,
    template::{Footer, SectionHeading, BRAND},
    toast::{notify, ToastHost},
  },
  utils::{
    catalog::{CatalogLoader, CatalogView, HttpCatalogSource, CATALOG_URL},
    lead::LeadForm,
    notify::ToastQueue,
  },
};

fn scroll_to(section_id: &str) {
  document::eval(&format!(
    "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth' }});",
    section_id
  ));
}

#[component]
pub fn Landing() -> Element {
  static CSS: Asset = asset!("/assets/landing.css");

  let mut catalog: Signal<CatalogView> = use_signal(CatalogView::default);
  let lead: Signal<LeadForm> = use_signal(LeadForm::default);
  let toasts: Signal<ToastQueue> = use_signal(ToastQueue::default);

  // one loader per mounted page; a re-mount gets a fresh one and fetches again
  let loader = use_hook(|| Rc::new(CatalogLoader::new(HttpCatalogSource::new(CATALOG_URL))));
  use_drop({
    let loader = loader.clone();
    move || loader.dispose()
  });

  use_future(move || {
    let loader = loader.clone();
    async move {
      if let Some(result) = loader.load().await {
        let notification = catalog.write().resolve(result);
        if let Some(notification) = notification {
          notify(toasts, notification);
        }
      }
    }
  });

  rsx! {
    document::Stylesheet { href: CSS },
    div {
      class: "landing-page",
      Hero {}
      section {
        id: "catalog",
        class: "section section-tinted",
        div {
          class: "container",
          SectionHeading {
            icon: IconName::Layers,
            title: "КАТАЛОГ ПРОДУКЦИИ",
            subtitle: "Широкий ассортимент металлопроката от производителей"
          }
          CatalogGrid { catalog }
        }
      },
      section {
        id: "price",
        class: "section",
        div {
          class: "container",
          SectionHeading {
            icon: IconName::FileText,
            title: "ПРАЙС-ЛИСТ",
            subtitle: "Актуальные цены на металлопродукцию"
          }
          PriceTable { catalog }
        }
      },
      section {
        id: "contact",
        class: "section section-tinted",
        div {
          class: "container container-narrow",
          SectionHeading {
            icon: IconName::MessageSquare,
            title: "КОММЕРЧЕСКОЕ ПРЕДЛОЖЕНИЕ",
            subtitle: "Оставьте заявку и получите индивидуальный расчет"
          }
          div {
            class: "form-card",
            ContactForm { lead, toasts }
          }
        }
      },
      Footer {}
      ToastHost { toasts }
    }
  }
}

#[component]
fn Hero() -> Element {
  rsx! {
    section {
      class: "hero",
      div {
        class: "hero-content",
        div {
          class: "hero-title-row",
          Icon { name: IconName::Cog, class: "hero-cog" },
          h1 { class: "hero-title", "{BRAND}" }
        },
        p { class: "hero-subtitle", "Поставки металлопродукции для промышленности и строительства" },
        div {
          class: "hero-actions",
          button {
            r#type: "button",
            class: "button button-primary button-large",
            onclick: move |_evt| scroll_to("catalog"),
            Icon { name: IconName::Package },
            "Каталог"
          },
          button {
            r#type: "button",
            class: "button button-outline button-large",
            onclick: move |_evt| scroll_to("contact"),
            Icon { name: IconName::Phone },
            "Связаться"
          }
        }
      },
      div { class: "hero-underline" }
    }
  }
}
