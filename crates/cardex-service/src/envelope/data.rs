//! Facet records carried inside a card envelope.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use cardex_core::types::CardType;
use serde::{Deserialize, Serialize};

/// Facet-specific payload of an envelope, tagged by card type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "card_type", content = "data", rename_all = "snake_case")]
pub enum CardData {
    PersonalIdentity(IdentityData),
    Email(EmailData),
    Phone(PhoneData),
    Address(AddressData),
}

impl CardData {
    #[must_use]
    pub const fn card_type(&self) -> CardType {
        match self {
            Self::PersonalIdentity(_) => CardType::PersonalIdentity,
            Self::Email(_) => CardType::Email,
            Self::Phone(_) => CardType::Phone,
            Self::Address(_) => CardType::Address,
        }
    }

    /// Labels of a contact point; identity carries none.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        match self {
            Self::PersonalIdentity(_) => &[],
            Self::Email(email) => &email.labels,
            Self::Phone(phone) => &phone.labels,
            Self::Address(address) => &address.labels,
        }
    }

    #[must_use]
    pub const fn is_primary(&self) -> bool {
        match self {
            Self::PersonalIdentity(_) => false,
            Self::Email(email) => email.is_primary,
            Self::Phone(phone) => phone.is_primary,
            Self::Address(address) => address.is_primary,
        }
    }
}

/// Name, birthday, photo and employment of one person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub middle_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nicknames: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<BirthDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Photo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
}

impl IdentityData {
    /// Display name, else given and family name joined by a space.
    #[must_use]
    pub fn best_name(&self) -> Option<String> {
        if let Some(display) = self.display_name.as_deref().map(str::trim)
            && !display.is_empty()
        {
            return Some(display.to_string());
        }
        cardex_rfc::rfc::vcard::core::join_name_parts([
            self.given_name.as_deref(),
            self.family_name.as_deref(),
        ])
    }
}

/// Partial calendar date; any component may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthDate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

impl BirthDate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }
}

/// Photo reference or inline payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Photo {
    Uri {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        media_type: Option<String>,
    },
    /// Base64 text as found in the source; checked to decode on import.
    Embedded {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        media_type: Option<String>,
        data: String,
    },
}

impl Photo {
    #[must_use]
    pub fn media_type(&self) -> Option<&str> {
        match self {
            Self::Uri { media_type, .. } | Self::Embedded { media_type, .. } => {
                media_type.as_deref()
            }
        }
    }

    /// Decodes an embedded payload. URIs yield `None`.
    #[must_use]
    pub fn decode(&self) -> Option<Vec<u8>> {
        match self {
            Self::Uri { .. } => None,
            Self::Embedded { data, .. } => STANDARD.decode(data.as_bytes()).ok(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Organization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
}

impl Organization {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.department.is_none() && self.division.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailData {
    pub full_address: String,
    pub username: String,
    pub domain: String,
    pub labels: Vec<String>,
    pub is_primary: bool,
}

/// Phone number; the digit groups are only filled for NANP shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhoneData {
    /// Display value, kept as written in the source.
    pub full_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    pub labels: Vec<String>,
    pub is_primary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_box: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub labels: Vec<String>,
    pub is_primary: bool,
}

impl AddressData {
    /// The five components that locate an address.
    #[must_use]
    pub fn locational(&self) -> [Option<&str>; 5] {
        [
            self.street_address.as_deref(),
            self.locality.as_deref(),
            self.region.as_deref(),
            self.postal_code.as_deref(),
            self.country.as_deref(),
        ]
    }
}
