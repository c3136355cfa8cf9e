//! Listing records and aggregate result types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ListingsError;

// == Statuses ==
/// Status a property or land must have to be shown as popular.
pub const AVAILABLE_STATUS: &str = "available";
/// Status a project must have to be shown as popular.
pub const ONGOING_STATUS: &str = "ongoing";

// == Listing Trait ==
/// Fields shared by every listing collection.
///
/// `category_field` is the collection-specific text searched alongside
/// title and location: property type, land zoning, or project developer.
pub trait Listing: Clone + Send + Sync + 'static {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn location(&self) -> &str;
    fn category_field(&self) -> &str;
    fn status(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
}

// == Property ==
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    /// apartment, villa, townhouse, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Square meters
    pub area: f64,
    #[serde(default)]
    pub images: Vec<String>,
    /// available, sold, reserved
    #[serde(default = "default_available")]
    pub status: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing for Property {
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn location(&self) -> &str {
        &self.location
    }
    fn category_field(&self) -> &str {
        &self.kind
    }
    fn status(&self) -> &str {
        &self.status
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// == Land ==
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Land {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    /// Square meters
    pub area: f64,
    /// commercial, residential, agricultural, ...
    pub zoning: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_available")]
    pub status: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing for Land {
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn location(&self) -> &str {
        &self.location
    }
    fn category_field(&self) -> &str {
        &self.zoning
    }
    fn status(&self) -> &str {
        &self.status
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// == Project ==
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub developer: String,
    pub total_units: u32,
    pub available_units: u32,
    pub starting_price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    /// ongoing, completed, upcoming
    #[serde(default = "default_ongoing")]
    pub status: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing for Project {
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn location(&self) -> &str {
        &self.location
    }
    fn category_field(&self) -> &str {
        &self.developer
    }
    fn status(&self) -> &str {
        &self.status
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn default_available() -> String {
    AVAILABLE_STATUS.to_string()
}

fn default_ongoing() -> String {
    ONGOING_STATUS.to_string()
}

// == Category ==
/// One of the three listing collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Properties,
    Lands,
    Projects,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Properties => "properties",
            Category::Lands => "lands",
            Category::Projects => "projects",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ListingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "properties" => Ok(Category::Properties),
            "lands" => Ok(Category::Lands),
            "projects" => Ok(Category::Projects),
            other => Err(ListingsError::InvalidRequest(format!(
                "Unknown listing type '{}', expected one of properties, lands, projects",
                other
            ))),
        }
    }
}

// == Popular Listings ==
/// Aggregate returned by `GET /listings/popular`, cached per limit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopularListings {
    pub properties: Vec<Property>,
    pub lands: Vec<Land>,
    pub projects: Vec<Project>,
}

// == Search Results ==
/// Search response; only the categories that were searched are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lands: Option<Vec<Land>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
}

impl SearchResults {
    /// All three categories present and empty.
    pub fn empty() -> Self {
        Self {
            properties: Some(Vec::new()),
            lands: Some(Vec::new()),
            projects: Some(Vec::new()),
        }
    }
}
