//! Response payloads returned by the Marvel API.
//!
//! Every endpoint answers with the same envelope: a [`DataWrapper`] holding
//! a [`DataContainer`] whose `results` carry the resources. Single-resource
//! lookups (`/characters/{id}`) use the same envelope with one result.
//!
//! Fields use `#[serde(default)]` for resilience against schema evolution.
//! Unknown fields are ignored.

use marvel_core::CharacterId;
use serde::{Deserialize, Serialize};

/// Envelope for every successful response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataWrapper<T> {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub attribution_text: Option<String>,
    #[serde(default, rename = "attributionHTML")]
    pub attribution_html: Option<String>,
    #[serde(default)]
    pub etag: Option<String>,
    pub data: DataContainer<T>,
}

impl<T> DataWrapper<T> {
    /// The resources in this page.
    pub fn results(&self) -> &[T] {
        &self.data.results
    }
}

/// Paged result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataContainer<T> {
    #[serde(default)]
    pub offset: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// A character.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Last modification time as sent by the API (`2014-04-29T14:18:17-0400`).
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<Image>,
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: Option<String>,
    #[serde(default)]
    pub urls: Vec<MarvelUrl>,
    #[serde(default)]
    pub comics: Option<ResourceList>,
    #[serde(default)]
    pub series: Option<ResourceList>,
    #[serde(default)]
    pub stories: Option<ResourceList>,
    #[serde(default)]
    pub events: Option<ResourceList>,
}

/// A comic-family resource: comic issue, series, story, or event.
///
/// The four kinds share the fields the client reads, so one type serves all
/// `/characters/{id}/{kind}` lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comic {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<Image>,
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: Option<String>,
    #[serde(default)]
    pub urls: Vec<MarvelUrl>,
}

/// Image reference split into path and extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub path: String,
    pub extension: String,
}

/// Public web link for a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarvelUrl {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

/// Summary list of related resources embedded in a character.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceList {
    #[serde(default)]
    pub available: Option<u32>,
    #[serde(default)]
    pub returned: Option<u32>,
    #[serde(default, rename = "collectionURI")]
    pub collection_uri: Option<String>,
    #[serde(default)]
    pub items: Vec<ResourceSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSummary {
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

pub type CharacterDataWrapper = DataWrapper<Character>;
pub type ComicDataWrapper = DataWrapper<Comic>;
