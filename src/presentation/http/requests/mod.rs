use poem_openapi::Object;

#[derive(Object, Debug)]
pub struct CreateGroupRequestDto {
    #[oai(validator(min_length = 1))]
    pub id: String,
    #[oai(validator(min_length = 1))]
    pub name: String,
}

#[derive(Object, Debug)]
pub struct CreateUserRequestDto {
    #[oai(validator(min_length = 1))]
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub role: String,
    pub group: String,
}

#[derive(Object, Debug)]
pub struct GroupEmailRequestDto {
    pub subject: String,
    pub body: String,
    pub role: Option<String>,
}

#[derive(Object, Debug)]
pub struct TeacherEmailRequestDto {
    pub subject: Option<String>,
    pub body: String,
}

#[derive(Object, Debug)]
pub struct ConfirmedTeacherEmailRequestDto {
    pub subject: Option<String>,
    pub body: Option<String>,
    pub confirm: bool,
}
