pub mod render;
pub mod system;
pub mod view;

pub use render::{present_not_found, present_opened, present_resolved};
pub use system::{present_guidance, present_init};
pub use view::{
    present_import, present_promotion, present_sql, present_status_change, present_validation,
    present_view_detail, present_view_list,
};
