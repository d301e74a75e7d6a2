pub mod portfolio;
pub mod site;

use serde::{Deserialize, Deserializer};

pub use portfolio::{Portfolio, PortfolioCategory, PortfolioItem};
pub use site::{
    Company, Contact, ContactPerson, Cta, Education, EducationItem, Experience,
    FeaturedWork, Footer, Hero, Job, Project, SiteData, SocialIconKind, SocialLink, TextOrList,
    Tool, ToolCategory, ToolIconKind, Tools,
};

/// Reads an explicit `null` as the field's default, the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
