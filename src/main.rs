use clap::Parser;
use spotdesk::cli::{
    handle_ack, handle_autoclose, handle_create, handle_history, handle_init, handle_list,
    handle_master_add_assignee, handle_master_add_category, handle_master_add_company,
    handle_master_add_hod, handle_master_add_location, handle_master_add_subcategory,
    handle_master_list, handle_seed, handle_show, handle_snapshot, handle_stats, handle_update,
    Cli, Commands, MasterAction,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => handle_init(),
        Commands::Seed => handle_seed(),
        Commands::Create {
            ticket_type,
            title,
            priority,
            description,
            department,
            sub_department,
            category,
            subcategory,
            location,
            reporter,
            expected,
            details,
            stdin,
            json,
        } => handle_create(
            ticket_type,
            title,
            priority,
            description,
            department,
            sub_department,
            category,
            subcategory,
            location,
            reporter,
            expected,
            details,
            stdin,
            json,
        ),
        Commands::List {
            status,
            ticket_type,
            json,
        } => handle_list(status, ticket_type, json),
        Commands::Show {
            ticket_number,
            json,
        } => handle_show(ticket_number, json),
        Commands::Update {
            ticket_number,
            title,
            status,
            priority,
            assignee,
            expected,
            actor,
            comment,
            json,
        } => handle_update(
            ticket_number,
            title,
            status,
            priority,
            assignee,
            expected,
            actor,
            comment,
            json,
        ),
        Commands::Ack {
            ticket_number,
            actor,
            comment,
        } => handle_ack(ticket_number, actor, comment),
        Commands::History {
            ticket_number,
            json,
        } => handle_history(ticket_number, json),
        Commands::Autoclose { json } => handle_autoclose(json),
        Commands::Stats { json } => handle_stats(json),
        Commands::Snapshot => handle_snapshot(),
        Commands::Master(master_cmd) => match master_cmd.action {
            MasterAction::List { kind, json } => handle_master_list(kind, json),
            MasterAction::AddCompany {
                code,
                short_name,
                name,
            } => handle_master_add_company(code, short_name, name),
            MasterAction::AddLocation {
                id,
                company_code,
                name,
            } => handle_master_add_location(id, company_code, name),
            MasterAction::AddCategory { id, name } => handle_master_add_category(id, name),
            MasterAction::AddSubcategory {
                id,
                category_id,
                name,
            } => handle_master_add_subcategory(id, category_id, name),
            MasterAction::AddAssignee {
                mapping_id,
                assignee,
                ticket_type,
                location,
                department,
                sub_dept,
                sub_task,
                task_label,
                hidden,
            } => handle_master_add_assignee(
                mapping_id,
                assignee,
                ticket_type,
                location,
                department,
                sub_dept,
                sub_task,
                task_label,
                hidden,
            ),
            MasterAction::AddHod {
                id,
                dept,
                sub_dept,
                hod_id,
                hod_name,
            } => handle_master_add_hod(id, dept, sub_dept, hod_id, hod_name),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
