use crate::presentation::view_models::{
    CommandResultViewModel, ConfigStatus, Guidance, GuidanceViewModel, InitResultViewModel,
    StatusBadge,
};

pub fn present_guidance(
    data_dir: String,
    config_exists: bool,
    db_exists: bool,
) -> CommandResultViewModel<GuidanceViewModel> {
    CommandResultViewModel::new(GuidanceViewModel {
        data_dir,
        config_exists,
        db_exists,
    })
}

pub fn present_init(content: InitResultViewModel) -> CommandResultViewModel<InitResultViewModel> {
    let label = match content.config_status {
        ConfigStatus::Created => "Initialized erpview",
        ConfigStatus::Overwritten => "Configuration reset to defaults",
        ConfigStatus::LoadedExisting => "Already initialized",
    };
    let empty = content.development_views == 0 && content.published_views == 0;

    let mut result = CommandResultViewModel::new(content).with_badge(StatusBadge::success(label));
    if empty {
        result = result.with_suggestion(
            Guidance::new("Save a view JSON file as a draft")
                .with_command("erpview view import <FILE>"),
        );
    }
    result
}
