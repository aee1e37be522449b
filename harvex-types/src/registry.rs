use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(pub Uuid);

impl InstanceId {

    pub const NIL: Self = Self(Uuid::from_bytes([0; 16]));

    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::NIL
    }
}

impl From<Uuid> for InstanceId {

    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

#[derive(thiserror::Error, Clone, Debug)]
#[error("Illegal InstanceId: {value}")]
pub struct IllegalInstanceId {
    pub value: String,
}

impl TryFrom<&str> for InstanceId {

    type Error = IllegalInstanceId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| IllegalInstanceId { value: String::from(value) })
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct InstanceName(pub(crate) String);

impl InstanceName {

    pub const MIN_LENGTH: usize = 1;
    pub const MAX_LENGTH: usize = 64;

    pub fn value(self) -> String {
        self.0
    }
}

#[derive(thiserror::Error, Clone, Debug)]
pub enum IllegalInstanceName {
    #[error("Instance name '{value}' is too short. Expected at least {expected} characters, got {actual}.")]
    TooShort { value: String, expected: usize, actual: usize },
    #[error("Instance name '{value}' is too long. Expected at most {expected} characters, got {actual}.")]
    TooLong { value: String, expected: usize, actual: usize },
    #[error("Instance name '{value}' contains invalid characters.")]
    InvalidCharacter { value: String },
}

impl From<InstanceName> for String {
    fn from(value: InstanceName) -> Self {
        value.0
    }
}

impl TryFrom<String> for InstanceName {

    type Error = IllegalInstanceName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let length = value.len();
        if length < Self::MIN_LENGTH {
            Err(IllegalInstanceName::TooShort {
                value,
                expected: Self::MIN_LENGTH,
                actual: length,
            })
        }
        else if length > Self::MAX_LENGTH {
            Err(IllegalInstanceName::TooLong {
                value,
                expected: Self::MAX_LENGTH,
                actual: length,
            })
        }
        else if ! crate::util::valid_start_and_end_of_a_name(&value) {
            Err(IllegalInstanceName::InvalidCharacter {
                value
            })
        }
        else if value.chars().any(|c| ! crate::util::valid_characters_in_name(&c)) {
            Err(IllegalInstanceName::InvalidCharacter {
                value
            })
        }
        else {
            Ok(Self(value))
        }
    }
}

impl TryFrom<&str> for InstanceName {

    type Error = IllegalInstanceName;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        InstanceName::try_from(value.to_owned())
    }
}

impl fmt::Display for InstanceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered OAI-PMH endpoint which records were harvested from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub id: InstanceId,
    pub name: InstanceName,
    pub base_url: Url,
    pub activated: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(pub Uuid);

impl TemplateId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for TemplateId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

#[derive(thiserror::Error, Clone, Debug)]
#[error("Illegal TemplateId: {value}")]
pub struct IllegalTemplateId {
    pub value: String,
}

impl TryFrom<&str> for TemplateId {

    type Error = IllegalTemplateId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| IllegalTemplateId { value: String::from(value) })
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Schema a metadata format maps to, named like "Dublin Core (version 1)".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    pub title: String,
    pub version: u32,
}

impl Template {
    pub fn origin(&self) -> String {
        format!("{} (version {})", self.title, self.version)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataFormatId(pub Uuid);

impl MetadataFormatId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for MetadataFormatId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

#[derive(thiserror::Error, Clone, Debug)]
#[error("Illegal MetadataFormatId: {value}")]
pub struct IllegalMetadataFormatId {
    pub value: String,
}

impl TryFrom<&str> for MetadataFormatId {

    type Error = IllegalMetadataFormatId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| IllegalMetadataFormatId { value: String::from(value) })
    }
}

impl fmt::Display for MetadataFormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata format offered by an instance, e.g. `oai_dc`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetadataFormat {
    pub id: MetadataFormatId,
    pub instance_id: InstanceId,
    pub metadata_prefix: String,
    pub template_id: Option<TemplateId>,
}
