#[derive(Debug, Clone)]
pub struct CreateReviewInput {
    pub title: String,
    pub text: String,
    pub rating: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateReviewInput {
    pub title: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i32>,
}
