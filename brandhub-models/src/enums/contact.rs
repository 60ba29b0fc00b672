use sea_orm::{sea_query::StringLen, DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Channel through which a brand can be reached.
///
/// Deserialization never fails: unknown inputs normalize to [`ContactKind::Other`].
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(
    rs_type = "String",
    db_type = "String(StringLen::N(20))",
    rename_all = "lowercase"
)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ContactKind {
    Phone,
    Email,
    Telegram,
    Whatsapp,
    Mail,
    #[default]
    Other,
}

impl ContactKind {
    /// Case-insensitive parse with fallback to `Other`.
    pub fn normalize(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "phone" => ContactKind::Phone,
            "email" => ContactKind::Email,
            "telegram" => ContactKind::Telegram,
            "whatsapp" => ContactKind::Whatsapp,
            "mail" => ContactKind::Mail,
            _ => ContactKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactKind::Phone => "phone",
            ContactKind::Email => "email",
            ContactKind::Telegram => "telegram",
            ContactKind::Whatsapp => "whatsapp",
            ContactKind::Mail => "mail",
            ContactKind::Other => "other",
        }
    }
}

impl From<&str> for ContactKind {
    #[inline]
    fn from(value: &str) -> Self {
        ContactKind::normalize(value)
    }
}

impl From<String> for ContactKind {
    #[inline]
    fn from(value: String) -> Self {
        ContactKind::normalize(&value)
    }
}

impl Display for ContactKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
