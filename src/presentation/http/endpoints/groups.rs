use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use crate::presentation::http::{
    endpoints::root::{ApiState, EndpointsTags},
    mappers::map_domain_error,
    requests::{CreateGroupRequestDto, GroupEmailRequestDto},
    responses::CommandResponse,
};

#[derive(Clone)]
pub struct GroupsEndpoints {
    state: Arc<ApiState>,
}

impl GroupsEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl GroupsEndpoints {
    #[oai(path = "/groups", method = "post", tag = EndpointsTags::Groups)]
    pub async fn create_group(
        &self,
        request: Json<CreateGroupRequestDto>,
    ) -> PoemResult<CommandResponse> {
        self.state
            .campus
            .create_group(&request.id, &request.name)
            .await
            .map_err(map_domain_error)?;

        Ok(CommandResponse::Created)
    }

    /// Sends to every member of the group, or only to members holding
    /// `role` when it is given.
    #[oai(path = "/groups/:name/emails", method = "post", tag = EndpointsTags::Groups)]
    pub async fn send_group_email(
        &self,
        name: Path<String>,
        request: Json<GroupEmailRequestDto>,
    ) -> PoemResult<CommandResponse> {
        let campus = &self.state.campus;
        let outcome = match &request.role {
            Some(role) => {
                campus
                    .send_mail_to_group_role(&name.0, role, &request.subject, &request.body)
                    .await
            }
            None => {
                campus
                    .send_mail_to_group(&name.0, &request.subject, &request.body)
                    .await
            }
        };
        outcome.map_err(map_domain_error)?;

        Ok(CommandResponse::Done)
    }
}
