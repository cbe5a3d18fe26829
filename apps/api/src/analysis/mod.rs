// Resume gap analysis: keyword/skill extraction, skill comparison, bullet
// quality, experience gaps, ATS scoring and recommendations.
// Every analyzer is a pure function of its inputs; nothing is cached.

pub mod ats;
pub mod bullet;
pub mod experience;
pub mod extractor;
pub mod gap;
pub mod handlers;
pub mod recommendations;
pub mod skills;
pub mod taxonomy;
