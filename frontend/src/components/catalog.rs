#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::{
  components::icon::{Icon, IconName},
  utils::{catalog::{CatalogView, SectionContent}, server::Category},
};

#[component]
pub fn CatalogGrid(catalog: ReadOnlySignal<CatalogView>) -> Element {
  let view = catalog();

  rsx! {
    div {
      class: "catalog-grid",
      {match view.category_section() {
        SectionContent::Loading => rsx! {
          div { class: "catalog-placeholder", "Загрузка каталога..." }
        },
        SectionContent::Empty => rsx! {
          div { class: "catalog-placeholder", "Нет категорий" }
        },
        SectionContent::Rows(categories) => rsx! {
          for category in categories.iter() {
            CategoryCard { key: "{category.id}", category: category.clone() }
          }
        },
      }}
    }
  }
}

#[component]
fn CategoryCard(category: Category) -> Element {
  let Category { name, icon, description, .. } = category;
  let icon = IconName::from_name(&icon);

  rsx! {
    div {
      class: "category-card",
      div {
        class: "category-icon",
        Icon { name: icon }
      },
      h3 { class: "category-title", "{name}" },
      p { class: "category-description", "{description}" }
    }
  }
}
