pub mod add_experience_request;
pub mod create_profile_request;
pub mod delete_response;
pub mod experience;
pub mod profile_dto;
pub mod profiles;
pub mod update_experience_request;
