use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "spotdesk")]
#[command(version, about = "A local-first IT/admin ticketing desk")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new spotdesk project in the current directory
    Init,

    /// Load default master data into any empty list
    Seed,

    /// Raise a new ticket
    Create {
        /// Ticket type (it, vehicle, admin)
        #[arg(value_name = "TYPE")]
        ticket_type: String,

        /// Ticket title
        title: String,

        /// Priority (low, medium, high, critical)
        #[arg(long, default_value = "medium")]
        priority: String,

        /// Free-text description
        #[arg(long)]
        description: Option<String>,

        /// Department classification
        #[arg(long)]
        department: Option<String>,

        /// Sub-department classification
        #[arg(long = "sub-department")]
        sub_department: Option<String>,

        /// Category classification
        #[arg(long)]
        category: Option<String>,

        /// Subcategory classification
        #[arg(long)]
        subcategory: Option<String>,

        /// Location classification
        #[arg(long)]
        location: Option<String>,

        /// Reporter email (defaults to SPOTDESK_ACTOR or user@spot)
        #[arg(long)]
        reporter: Option<String>,

        /// Expected completion date (YYYY-MM-DD)
        #[arg(long)]
        expected: Option<String>,

        /// Extra form fields in format "key=value" (can be specified multiple times)
        #[arg(long = "detail", short = 'd', value_name = "KEY=VALUE")]
        details: Vec<String>,

        /// Read description from stdin
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List tickets
    List {
        /// Filter by status (open, in-progress, resolved, closed)
        #[arg(long)]
        status: Option<String>,

        /// Filter by ticket type (it, vehicle, admin)
        #[arg(long = "type")]
        ticket_type: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one ticket with its history (runs the auto-close sweep first)
    Show {
        /// Ticket number, e.g. TK-2024-0007
        ticket_number: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update fields on a ticket, recording one history entry per change
    Update {
        /// Ticket number
        ticket_number: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New status (open, in-progress, resolved, closed)
        #[arg(long)]
        status: Option<String>,

        /// New priority (low, medium, high, critical)
        #[arg(long)]
        priority: Option<String>,

        /// Assignee employee id (empty string clears)
        #[arg(long)]
        assignee: Option<String>,

        /// Expected completion date YYYY-MM-DD (empty string clears)
        #[arg(long)]
        expected: Option<String>,

        /// Acting user email (defaults to SPOTDESK_ACTOR or user@spot)
        #[arg(long)]
        actor: Option<String>,

        /// Comment attached to every recorded change
        #[arg(long)]
        comment: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record an IT acknowledgement on a ticket
    Ack {
        /// Ticket number
        ticket_number: String,

        /// Acting user email (defaults to SPOTDESK_ACTOR or user@spot)
        #[arg(long)]
        actor: Option<String>,

        /// Optional comment
        #[arg(long)]
        comment: Option<String>,
    },

    /// Show the audit history of a ticket
    History {
        /// Ticket number
        ticket_number: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Close every ticket resolved more than five days ago
    Autoclose {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ticket counts by status, priority, and type
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write markdown snapshots of the ticket list
    Snapshot,

    /// Master data management
    Master(MasterCommand),
}

#[derive(Args, Debug)]
pub struct MasterCommand {
    #[command(subcommand)]
    pub action: MasterAction,
}

#[derive(Subcommand, Debug)]
pub enum MasterAction {
    /// List master data (companies, locations, categories, subcategories, assignees, hods)
    List {
        #[arg(value_name = "KIND")]
        kind: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a company
    AddCompany {
        code: String,
        short_name: String,
        name: String,
    },

    /// Add a location
    AddLocation {
        id: String,
        company_code: String,
        name: String,
    },

    /// Add a category
    AddCategory { id: String, name: String },

    /// Add a subcategory
    AddSubcategory {
        id: String,
        category_id: String,
        name: String,
    },

    /// Add an assignee scoring mapping
    AddAssignee {
        mapping_id: String,

        /// Target assignee employee id
        assignee: String,

        /// Ticket type the rule applies to
        #[arg(long = "type")]
        ticket_type: String,

        #[arg(long, default_value = "")]
        location: String,

        #[arg(long, default_value = "")]
        department: String,

        #[arg(long = "sub-dept", default_value = "")]
        sub_dept: String,

        #[arg(long = "sub-task", default_value = "")]
        sub_task: String,

        #[arg(long = "task-label", default_value = "")]
        task_label: String,

        /// Create the mapping inactive so the scorer skips it
        #[arg(long)]
        hidden: bool,
    },

    /// Add a head-of-department mapping
    AddHod {
        id: String,
        dept: String,
        sub_dept: String,
        hod_id: String,
        hod_name: String,
    },
}
