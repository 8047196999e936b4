mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{} {} {}:{}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = cli::Args::parse();
    run(args)
}

#[cfg(windows)]
fn run(args: cli::Args) -> Result<()> {
    use cli::Cmd;

    match args.cmd {
        Cmd::Status { name } => {
            let status = svcctl::query_status(&name)?;
            println!("state:             {}", status.state);
            println!("service type:      {:#x}", status.service_type);
            println!("exit code:         {}", status.exit_code);
            println!("checkpoint:        {}", status.checkpoint);
            println!("controls accepted: {:#x}", status.controls_accepted);
            println!("wait hint:         {}ms", status.wait_hint_ms);
            println!("process id:        {}", status.process_id);
        }
        Cmd::State { name } => {
            println!("{}", svcctl::query_state(&name)?);
        }
        Cmd::Start { name } => {
            svcctl::start(&name)?;
            println!("{name} is running");
        }
        Cmd::Stop { name } => {
            svcctl::stop(&name)?;
            println!("{name} is stopped");
        }
        Cmd::Pause { name } => {
            svcctl::pause(&name)?;
            println!("{name} is paused");
        }
        Cmd::Resume { name } => {
            svcctl::resume(&name)?;
            println!("{name} is running");
        }
        Cmd::Install {
            name,
            display_name,
            binary_path,
            startup,
            account,
            password,
        } => {
            svcctl::install(
                &name,
                &display_name,
                startup.into(),
                &binary_path,
                account.as_deref(),
                password.as_deref(),
            )?;
            println!("{name} installed and started");
        }
        Cmd::Uninstall { name } => {
            svcctl::uninstall(&name)?;
            println!("{name} marked for deletion");
        }
        Cmd::Describe { name, text } => {
            svcctl::change_description(&name, &text)?;
            println!("{name} description updated");
        }
        Cmd::SetStartup { name, startup } => {
            svcctl::change_startup_type(&name, startup.into())?;
            println!("{name} startup type set to {}", svcctl::StartupType::from(startup));
        }
        Cmd::DelayedAutostart { name, enabled } => {
            svcctl::set_delayed_autostart(&name, enabled)?;
            println!(
                "{name} delayed auto-start {}",
                if enabled { "enabled" } else { "disabled" }
            );
        }
    }
    Ok(())
}

// Non-Windows builds get a stub so the binary compiles everywhere.
#[cfg(not(windows))]
fn run(args: cli::Args) -> Result<()> {
    let _ = args;
    anyhow::bail!("svcctl manages Windows services and must run on Windows");
}
