// Insurance-completion tracking: marks the user's insurance done and records
// the active policy.

pub mod handlers;
