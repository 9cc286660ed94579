use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{OpenApi, payload::Json};

use crate::presentation::http::{
    endpoints::root::{ApiState, EndpointsTags},
    mappers::map_domain_error,
    requests::CreateUserRequestDto,
    responses::CommandResponse,
};

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UsersEndpoints {
    #[oai(path = "/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(
        &self,
        request: Json<CreateUserRequestDto>,
    ) -> PoemResult<CommandResponse> {
        self.state
            .campus
            .create_user(
                &request.id,
                &request.name,
                &request.surname,
                &request.email,
                &request.role,
                &request.group,
            )
            .await
            .map_err(map_domain_error)?;

        Ok(CommandResponse::Created)
    }
}
