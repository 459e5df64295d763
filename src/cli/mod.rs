mod commands;
mod handlers;

pub use commands::{Cli, Commands, MasterAction, MasterCommand};
pub use handlers::{
    handle_ack, handle_autoclose, handle_create, handle_history, handle_init, handle_list,
    handle_master_add_assignee, handle_master_add_category, handle_master_add_company,
    handle_master_add_hod, handle_master_add_location, handle_master_add_subcategory,
    handle_master_list, handle_seed, handle_show, handle_snapshot, handle_stats, handle_update,
};
