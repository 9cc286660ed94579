use poem_openapi::ApiResponse;

#[derive(ApiResponse)]
pub enum CommandResponse {
    #[oai(status = 201)]
    Created,
    #[oai(status = 204)]
    Done,
}
