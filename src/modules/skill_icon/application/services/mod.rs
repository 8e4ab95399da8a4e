mod import_skill_icons_service;

pub use import_skill_icons_service::ImportSkillIconsService;
