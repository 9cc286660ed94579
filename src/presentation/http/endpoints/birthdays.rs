use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::OpenApi;

use crate::presentation::http::{
    endpoints::root::{ApiState, EndpointsTags},
    mappers::map_domain_error,
    responses::CommandResponse,
};

#[derive(Clone)]
pub struct BirthdaysEndpoints {
    state: Arc<ApiState>,
}

impl BirthdaysEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl BirthdaysEndpoints {
    #[oai(path = "/birthdays/greetings", method = "post", tag = EndpointsTags::Birthdays)]
    pub async fn publish_birthday_greetings(&self) -> PoemResult<CommandResponse> {
        self.state
            .campus
            .send_birthday_emails()
            .await
            .map_err(map_domain_error)?;

        Ok(CommandResponse::Done)
    }
}
