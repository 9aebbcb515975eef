//! Landing page sections, in scroll order.

pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;
