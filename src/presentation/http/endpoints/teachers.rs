use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use crate::presentation::http::{
    endpoints::root::{ApiState, EndpointsTags},
    mappers::map_domain_error,
    requests::{ConfirmedTeacherEmailRequestDto, TeacherEmailRequestDto},
    responses::CommandResponse,
};

#[derive(Clone)]
pub struct TeachersEndpoints {
    state: Arc<ApiState>,
}

impl TeachersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl TeachersEndpoints {
    #[oai(path = "/teachers/:id/emails", method = "post", tag = EndpointsTags::Teachers)]
    pub async fn send_teacher_email(
        &self,
        id: Path<String>,
        request: Json<TeacherEmailRequestDto>,
    ) -> PoemResult<CommandResponse> {
        self.state
            .campus
            .send_email_to_teacher_id(&id.0, request.subject.as_deref(), &request.body)
            .await
            .map_err(map_domain_error)?;

        Ok(CommandResponse::Done)
    }

    #[oai(
        path = "/teachers/:id/confirmed-emails",
        method = "post",
        tag = EndpointsTags::Teachers,
    )]
    pub async fn send_confirmed_teacher_email(
        &self,
        id: Path<String>,
        request: Json<ConfirmedTeacherEmailRequestDto>,
    ) -> PoemResult<CommandResponse> {
        self.state
            .campus
            .send_email_to_teacher_id_with_confirmation(
                &id.0,
                request.subject.as_deref(),
                request.body.as_deref(),
                request.confirm,
            )
            .await
            .map_err(map_domain_error)?;

        Ok(CommandResponse::Done)
    }
}
