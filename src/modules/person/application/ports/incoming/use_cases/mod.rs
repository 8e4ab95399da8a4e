mod get_person_profile;

pub use get_person_profile::{GetPersonProfileError, GetPersonProfileUseCase};
