use crate::domain::advanced_results::value_objects::Populate;

#[derive(Debug, Clone)]
pub struct CreateBootcampInput {
    pub name: String,
    pub description: String,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: String,
    pub careers: Vec<String>,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBootcampInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub careers: Option<Vec<String>>,
    pub housing: Option<bool>,
    pub job_assistance: Option<bool>,
    pub job_guarantee: Option<bool>,
    pub accept_gi: Option<bool>,
}

/// Parent bootcamp projection inlined into courses and reviews.
pub fn bootcamp_summary() -> Populate {
    Populate::with_select("bootcamp", &["name", "description"])
}
