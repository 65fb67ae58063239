#![allow(non_snake_case)]

use dioxus::prelude::*;

/// Icons the landing page knows how to draw. Category icons come from the catalog
/// as plain names; anything not listed here falls back to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
  Cog,
  Package,
  Phone,
  Layers,
  FileText,
  MessageSquare,
  Send,
  Factory,
  Box,
  Boxes,
  Cylinder,
  Square,
  Grid3x3,
  Columns,
  Wrench,
  Hammer,
  Truck,
  Construction,
  Ruler,
  Unknown,
}

impl IconName {
  pub fn from_name(name: &str) -> Self {
    match name.trim() {
      "Cog" | "Settings" => Self::Cog,
      "Package" => Self::Package,
      "Phone" => Self::Phone,
      "Layers" => Self::Layers,
      "FileText" => Self::FileText,
      "MessageSquare" => Self::MessageSquare,
      "Send" => Self::Send,
      "Factory" => Self::Factory,
      "Box" => Self::Box,
      "Boxes" => Self::Boxes,
      "Cylinder" | "Circle" => Self::Cylinder,
      "Square" | "RectangleHorizontal" => Self::Square,
      "Grid3x3" | "Grid" => Self::Grid3x3,
      "Columns" | "Columns3" => Self::Columns,
      "Wrench" => Self::Wrench,
      "Hammer" => Self::Hammer,
      "Truck" => Self::Truck,
      "Construction" => Self::Construction,
      "Ruler" => Self::Ruler,
      _ => Self::Unknown,
    }
  }

  pub fn glyph(&self) -> &'static str {
    match self {
      Self::Cog => "⚙",
      Self::Package => "📦",
      Self::Phone => "📞",
      Self::Layers => "🗂",
      Self::FileText => "📄",
      Self::MessageSquare => "💬",
      Self::Send => "➤",
      Self::Factory => "🏭",
      Self::Box => "▣",
      Self::Boxes => "▦",
      Self::Cylinder => "◎",
      Self::Square => "▭",
      Self::Grid3x3 => "▩",
      Self::Columns => "▥",
      Self::Wrench => "🔧",
      Self::Hammer => "🔨",
      Self::Truck => "🚚",
      Self::Construction => "🏗",
      Self::Ruler => "📏",
      Self::Unknown => "◆",
    }
  }
}

#[component]
pub fn Icon(name: IconName, #[props(default)] class: String) -> Element {
  let glyph = name.glyph();

  rsx! {
    span {
      class: "icon {class}",
      aria_hidden: "true",
      "{glyph}"
    }
  }
}
