//! Client details printed on the quotation

use serde::{Deserialize, Serialize};

/// Prefix of every quotation file name
pub const QUOTATION_FILE_PREFIX: &str = "Quotation_";

/// Who the quotation is for and who produced it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDetails {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub occupation: String,
    /// Agent or broker producing the business
    #[serde(default)]
    pub producer: String,
    #[serde(default)]
    pub location: String,
    /// Tax PIN
    #[serde(default)]
    pub pin: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub policy_no: String,
}

impl ClientDetails {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Labelled fields in the order they are printed
    pub fn printed_fields(&self) -> [(&'static str, &str); 7] {
        [
            ("Client Name", self.name.as_str()),
            ("Address", self.address.as_str()),
            ("Occupation", self.occupation.as_str()),
            ("Producer", self.producer.as_str()),
            ("PIN", self.pin.as_str()),
            ("Email", self.email.as_str()),
            ("Phone", self.phone.as_str()),
        ]
    }

    /// `Quotation_<name with spaces as underscores>.<extension>`
    pub fn document_file_name(&self, extension: &str) -> String {
        format!("{}{}.{}", QUOTATION_FILE_PREFIX, self.name.replace(' ', "_"), extension)
    }
}
