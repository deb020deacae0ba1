// Skills/preferences assessment: the form submission that creates or replaces a profile.

pub mod form;
pub mod handlers;
