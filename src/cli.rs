use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about = "Windows service control helper")]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print the full status snapshot of a service
    Status { name: String },
    /// Print just the current state (Exit 0 = queried, 1 = failed)
    State { name: String },
    /// Start a service and wait for it to report running
    Start { name: String },
    /// Stop a service and wait for it to report stopped
    Stop { name: String },
    /// Pause a service and wait for it to report paused
    Pause { name: String },
    /// Resume a paused service and wait for it to report running
    Resume { name: String },
    /// Create a service record and start it
    Install {
        name: String,

        /// Name shown in the services console
        #[arg(long)]
        display_name: String,

        /// Path to the service executable
        #[arg(long)]
        binary_path: String,

        /// When the SCM launches the service
        #[arg(long, value_enum, default_value = "auto")]
        startup: Startup,

        /// Account to run under (LocalSystem when omitted)
        #[arg(long)]
        account: Option<String>,

        /// Password for --account
        #[arg(long, requires = "account")]
        password: Option<String>,
    },
    /// Mark a service record for deletion
    Uninstall { name: String },
    /// Replace the description text of a service
    Describe { name: String, text: String },
    /// Change when the service starts at boot
    SetStartup {
        name: String,
        #[arg(value_enum)]
        startup: Startup,
    },
    /// Enable or disable delayed automatic start
    DelayedAutostart {
        name: String,
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Startup {
    Boot,
    System,
    Auto,
    Demand,
    Disabled,
}

impl From<Startup> for svcctl::StartupType {
    fn from(value: Startup) -> Self {
        match value {
            Startup::Boot => Self::BootStart,
            Startup::System => Self::SystemStart,
            Startup::Auto => Self::AutoStart,
            Startup::Demand => Self::DemandStart,
            Startup::Disabled => Self::Disabled,
        }
    }
}
