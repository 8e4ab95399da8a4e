mod person_profile_query;

pub use person_profile_query::PersonProfileQuery;
