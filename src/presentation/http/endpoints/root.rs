use std::sync::Arc;

use poem_openapi::Tags;

use crate::application::campus_app::CampusApp;

#[derive(Clone)]
pub struct ApiState {
    pub campus: Arc<CampusApp>,
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Groups,
    Users,
    Teachers,
    Birthdays,
}
