mod person_profile_query_sanity;

pub use person_profile_query_sanity::SanityPersonProfileQuery;
