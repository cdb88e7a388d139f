// app/src/web/notice.rs

//! One-shot status banners shown on the admin list after a redirect.
//!
//! A notice travels as a fixed code in the `notice` query parameter, so the
//! server keeps no per-user state between the write and the list page.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
  Created,
  Updated,
  Deleted,
  NotFound,
}

/// What the list template receives.
#[derive(Debug, Serialize)]
pub struct NoticeView {
  pub message: &'static str,
  pub is_error: bool,
}

impl Notice {
  pub fn code(self) -> &'static str {
    match self {
      Notice::Created => "created",
      Notice::Updated => "updated",
      Notice::Deleted => "deleted",
      Notice::NotFound => "not_found",
    }
  }

  /// Unknown codes yield `None` and are simply not shown.
  pub fn from_code(code: &str) -> Option<Self> {
    match code {
      "created" => Some(Notice::Created),
      "updated" => Some(Notice::Updated),
      "deleted" => Some(Notice::Deleted),
      "not_found" => Some(Notice::NotFound),
      _ => None,
    }
  }

  pub fn message(self) -> &'static str {
    match self {
      Notice::Created => "បានបង្កើតទំនិញដោយជោគជ័យ (Record was successfully created.)",
      Notice::Updated => "បានកែប្រែទំនិញដោយជោគជ័យ (Record was successfully saved.)",
      Notice::Deleted => "បានលុបទំនិញដោយជោគជ័យ (Record was successfully deleted.)",
      Notice::NotFound => "រកមិនឃើញទំនិញ (Record does not exist.)",
    }
  }

  pub fn is_error(self) -> bool {
    self == Notice::NotFound
  }

  pub fn view(self) -> NoticeView {
    NoticeView {
      message: self.message(),
      is_error: self.is_error(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn codes_round_trip() {
    for notice in [Notice::Created, Notice::Updated, Notice::Deleted, Notice::NotFound] {
      assert_eq!(Notice::from_code(notice.code()), Some(notice));
    }
    assert_eq!(Notice::from_code("<script>"), None);
  }
}
