pub mod profile;
pub mod role;
pub mod skill_resource;
