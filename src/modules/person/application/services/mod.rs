mod get_person_profile_service;

pub use get_person_profile_service::GetPersonProfileService;
