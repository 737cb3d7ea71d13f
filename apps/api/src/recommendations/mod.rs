// Internship recommendations: a fixed-weight additive scorer over the
// posting catalog, plus optional persistence of the requester's preferences
// when the request carries a bearer token.

pub mod catalog;
pub mod handlers;
pub mod scorer;
