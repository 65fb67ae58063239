#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::utils::{catalog::{CatalogView, SectionContent}, price::format_price, server::PriceItem};

#[component]
pub fn PriceTable(catalog: ReadOnlySignal<CatalogView>) -> Element {
  let view = catalog();

  rsx! {
    div {
      class: "price-card",
      div {
        class: "price-scroll",
        table {
          class: "price-table",
          TitleRow {}
          tbody {
            {match view.price_section() {
              SectionContent::Loading => rsx! {
                tr { td { class: "price-placeholder", colspan: "4", "Загрузка..." } }
              },
              SectionContent::Empty => rsx! {
                tr { td { class: "price-placeholder", colspan: "4", "Нет данных" } }
              },
              SectionContent::Rows(items) => rsx! {
                for item in items.iter() {
                  PriceRow { key: "{item.id}", item: item.clone() }
                }
              },
            }}
          }
        }
      },
      div {
        class: "price-footnote",
        p {
          "* Цены указаны за тонну без учета НДС. Минимальная партия — 1 тонна. Доставка по городу — от 3000 ₽. Актуальность цен уточняйте у менеджера."
        }
      }
    }
  }
}

#[component]
fn TitleRow() -> Element {
  rsx! {
    thead {
      tr {
        th { class: "col-left", "Наименование" },
        th { class: "col-left", "Характеристики" },
        th { class: "col-right", "Цена, ₽" },
        th { class: "col-center", "Ед. изм." }
      }
    }
  }
}

#[component]
fn PriceRow(item: PriceItem) -> Element {
  let price = format_price(&item.price);

  rsx! {
    tr {
      class: "price-row",
      td { class: "price-name", "{item.name}" },
      td { class: "price-specs", "{item.specs}" },
      td { class: "price-value", "{price}" },
      td { class: "price-unit", "{item.unit}" }
    }
  }
}
