mod import_skill_icons;

pub use import_skill_icons::{
    FailedIcon, ImportReport, ImportSkillIconsError, ImportSkillIconsUseCase,
};
