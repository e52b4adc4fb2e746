//! Domain aggregates - the core business objects and their mutation rules.

mod guard;
mod post;
mod profile;
mod user;

pub use guard::authorize;
pub use post::{AuthorSnapshot, Comment, Like, Post};
pub use profile::{
    Education, EducationInput, Experience, ExperienceInput, Profile, ProfileUpdate, SocialLinks,
    parse_skills,
};
pub use user::User;
