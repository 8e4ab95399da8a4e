mod reference_resolver;

pub use reference_resolver::ReferenceResolver;
