use super::notify::{Notification, LEAD_ACCEPTED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
  Company,
  Contact,
  Phone,
  Email,
  Message,
}

impl LeadField {
  pub const ALL: [LeadField; 5] = [
    LeadField::Company,
    LeadField::Contact,
    LeadField::Phone,
    LeadField::Email,
    LeadField::Message,
  ];

  /// DOM id, also used as the label target.
  pub fn id(&self) -> &'static str {
    match self {
      Self::Company => "company",
      Self::Contact => "contact",
      Self::Phone => "phone",
      Self::Email => "email",
      Self::Message => "message",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      Self::Company => "Название компании *",
      Self::Contact => "Контактное лицо *",
      Self::Phone => "Телефон *",
      Self::Email => "Email",
      Self::Message => "Интересующая продукция *",
    }
  }

  pub fn placeholder(&self) -> &'static str {
    match self {
      Self::Company => "ООО «Ваша компания»",
      Self::Contact => "Иван Иванов",
      Self::Phone => "+7 (999) 123-45-67",
      Self::Email => "info@company.ru",
      Self::Message => "Укажите наименование, характеристики и объем партии...",
    }
  }

  pub fn input_type(&self) -> &'static str {
    match self {
      Self::Phone => "tel",
      Self::Email => "email",
      _ => "text",
    }
  }

  // enforced by the browser through the `required` attribute only
  pub fn is_required(&self) -> bool {
    !matches!(self, Self::Email)
  }
}

/// Lead form contents for the current page session. Never sent anywhere.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeadForm {
  pub company: String,
  pub contact: String,
  pub phone: String,
  pub email: String,
  pub message: String,
}

impl LeadForm {
  pub fn get(&self, field: LeadField) -> &str {
    match field {
      LeadField::Company => &self.company,
      LeadField::Contact => &self.contact,
      LeadField::Phone => &self.phone,
      LeadField::Email => &self.email,
      LeadField::Message => &self.message,
    }
  }

  pub fn set(&mut self, field: LeadField, value: String) {
    let slot = match field {
      LeadField::Company => &mut self.company,
      LeadField::Contact => &mut self.contact,
      LeadField::Phone => &mut self.phone,
      LeadField::Email => &mut self.email,
      LeadField::Message => &mut self.message,
    };
    *slot = value;
  }

  pub fn is_empty(&self) -> bool {
    LeadField::ALL.iter().all(|f| self.get(*f).is_empty())
  }

  /// Acknowledges the lead locally: clears every field and hands back the toast to show.
  pub fn submit(&mut self) -> Notification {
    *self = LeadForm::default();
    LEAD_ACCEPTED
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn filled() -> LeadForm {
    LeadForm {
      company: "ООО «Сталь»".to_string(),
      contact: "Пётр Петров".to_string(),
      phone: "+7 (900) 000-00-00".to_string(),
      email: String::new(),
      message: "Арматура А500С 12 мм, 20 т".to_string(),
    }
  }

  #[test]
  fn test_set_touches_only_one_field() {
    for field in LeadField::ALL {
      let mut form = filled();
      let before = form.clone();
      form.set(field, "новое значение".to_string());

      for other in LeadField::ALL {
        if other == field {
          assert_eq!(form.get(other), "новое значение");
        } else {
          assert_eq!(form.get(other), before.get(other), "{:?} changed when editing {:?}", other, field);
        }
      }
    }
  }

  #[test]
  fn test_submit_resets_and_acknowledges() {
    let mut form = filled();
    let notification = form.submit();
    assert_eq!(notification, LEAD_ACCEPTED);
    assert!(form.is_empty());
    assert_eq!(form, LeadForm::default());
  }

  #[test]
  fn test_required_fields() {
    let required: Vec<&str> = LeadField::ALL.iter().filter(|f| f.is_required()).map(|f| f.id()).collect();
    assert_eq!(required, vec!["company", "contact", "phone", "message"]);
  }

  #[test]
  fn test_field_ids_are_unique() {
    let mut ids: Vec<&str> = LeadField::ALL.iter().map(|f| f.id()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), LeadField::ALL.len());
  }
}
