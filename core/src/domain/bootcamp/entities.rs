use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    bootcamp::value_objects::{CreateBootcampInput, UpdateBootcampInput},
    common::generate_timestamp,
};

pub const DEFAULT_PHOTO: &str = "no-photo.jpg";

pub const CAREERS: [&str; 6] = [
    "Web Development",
    "Mobile Development",
    "UI/UX",
    "Data Science",
    "Business",
    "Other",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Bootcamp {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: String,
    pub careers: Vec<String>,
    pub average_rating: Option<f64>,
    pub average_cost: Option<f64>,
    pub photo: String,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bootcamp {
    pub fn new(user_id: Uuid, input: CreateBootcampInput) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            slug: slugify(&input.name),
            name: input.name,
            description: input.description,
            website: input.website,
            phone: input.phone,
            email: input.email,
            address: input.address,
            careers: input.careers,
            average_rating: None,
            average_cost: None,
            photo: DEFAULT_PHOTO.to_string(),
            housing: input.housing,
            job_assistance: input.job_assistance,
            job_guarantee: input.job_guarantee,
            accept_gi: input.accept_gi,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial update; the slug follows the name.
    pub fn apply(&mut self, input: UpdateBootcampInput) {
        if let Some(name) = input.name {
            self.slug = slugify(&name);
            self.name = name;
        }
        if let Some(description) = input.description {
            self.description = description;
        }
        if input.website.is_some() {
            self.website = input.website;
        }
        if input.phone.is_some() {
            self.phone = input.phone;
        }
        if input.email.is_some() {
            self.email = input.email;
        }
        if let Some(address) = input.address {
            self.address = address;
        }
        if let Some(careers) = input.careers {
            self.careers = careers;
        }
        if let Some(housing) = input.housing {
            self.housing = housing;
        }
        if let Some(job_assistance) = input.job_assistance {
            self.job_assistance = job_assistance;
        }
        if let Some(job_guarantee) = input.job_guarantee {
            self.job_guarantee = job_guarantee;
        }
        if let Some(accept_gi) = input.accept_gi {
            self.accept_gi = accept_gi;
        }
        self.updated_at = Utc::now();
    }
}

/// URL-safe lower-case form of a name: "Devworks Bootcamp" -> "devworks-bootcamp".
pub fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> CreateBootcampInput {
        CreateBootcampInput {
            name: name.to_string(),
            description: "Full stack web development".to_string(),
            website: None,
            phone: None,
            email: None,
            address: "233 Bay State Rd Boston MA 02215".to_string(),
            careers: vec!["Web Development".to_string()],
            housing: true,
            job_assistance: true,
            job_guarantee: false,
            accept_gi: true,
        }
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Devworks Bootcamp"), "devworks-bootcamp");
        assert_eq!(slugify("  UI/UX -- Lab! "), "ui-ux-lab");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn new_bootcamp_has_defaults() {
        let owner = Uuid::new_v4();
        let bootcamp = Bootcamp::new(owner, input("ModernTech Bootcamp"));

        assert_eq!(bootcamp.user_id, owner);
        assert_eq!(bootcamp.slug, "moderntech-bootcamp");
        assert_eq!(bootcamp.photo, DEFAULT_PHOTO);
        assert_eq!(bootcamp.average_rating, None);
        assert_eq!(bootcamp.average_cost, None);
    }

    #[test]
    fn renaming_updates_slug() {
        let mut bootcamp = Bootcamp::new(Uuid::new_v4(), input("Devworks Bootcamp"));
        bootcamp.apply(UpdateBootcampInput {
            name: Some("Codemasters".to_string()),
            housing: Some(false),
            ..Default::default()
        });

        assert_eq!(bootcamp.slug, "codemasters");
        assert!(!bootcamp.housing);
        assert!(bootcamp.job_assistance);
    }
}
