//! Static tabular resources: the skill catalog and the job-description table

pub mod jobs;
pub mod skills;

pub use jobs::{JobBoard, JobPosting};
pub use skills::{SkillCatalog, SkillCategory, OTHER_CATEGORY};
