mod person_profile;

pub use person_profile::{PersonProfile, ProfileSkill};
