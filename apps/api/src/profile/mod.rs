// Resume profile: the document whose skills and title feed the
// resume-side keyword vocabulary.

pub mod handlers;
pub mod models;
