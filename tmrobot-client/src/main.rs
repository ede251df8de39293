//! Command-line control of a TM robot over Modbus/TCP

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use tmrobot::client::{connect, Session};
use tmrobot::config::{DEFAULT_HOST, DEFAULT_UNIT_ID};
use tmrobot::{ConnectConfig, ProjectName, Robot, Speed};

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Robot(#[from] tmrobot::Error),
    #[error("invalid log level: {0}")]
    LogLevel(String),
}

#[derive(Parser)]
#[command(name = "tmrobot-client")]
#[command(about = "A command line program for driving a TM robot over Modbus/TCP")]
#[command(version)]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_HOST, help = "Socket address of the robot")]
    host: SocketAddr,

    #[arg(short = 'i', long, default_value_t = DEFAULT_UNIT_ID, help = "The unit id of the robot")]
    id: u8,

    #[arg(short = 't', long, default_value_t = 1000, help = "Response timeout in milliseconds")]
    timeout_ms: u64,

    #[arg(long, default_value = "info", help = "Log level (trace, debug, info, warn, error)")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(name = "project", about = "change the current project")]
    ChangeProject(ProjectArgs),

    #[command(name = "play-pause", about = "play or pause the current project")]
    PlayPause,

    #[command(name = "speed", about = "change the project speed")]
    Speed(SpeedArgs),

    #[command(name = "error", about = "read the error flag")]
    Error,

    #[command(name = "running", about = "read the project running flag")]
    Running,

    #[command(name = "status", about = "read both status flags")]
    Status,

    #[command(name = "tutorial", about = "change project, play/pause, set speed, then read the status")]
    Tutorial(TutorialArgs),
}

#[derive(Args)]
struct ProjectArgs {
    #[arg(help = "name of the project file")]
    name: ProjectName,
}

#[derive(Args)]
struct SpeedArgs {
    #[arg(help = "speed percentage (0 to 100)")]
    percent: Speed,
}

#[derive(Args)]
struct TutorialArgs {
    #[arg(short = 'p', long, default_value = "pointspose", help = "name of the project file")]
    project: ProjectName,

    #[arg(short = 's', long, default_value = "25", help = "speed percentage (0 to 100)")]
    speed: Speed,
}

impl Cli {
    fn connect_config(&self) -> ConnectConfig {
        ConnectConfig {
            unit_id: self.id,
            timeout: Duration::from_millis(self.timeout_ms),
            ..ConnectConfig::new(self.host)
        }
    }

    fn log_level(&self) -> Result<tracing::Level, Error> {
        self.log_level
            .parse()
            .map_err(|_| Error::LogLevel(self.log_level.clone()))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level()?)
        .with_target(false)
        .init();

    if let Err(ref e) = run(&cli).await {
        println!("error: {e}");
    }

    Ok(())
}

async fn run(cli: &Cli) -> Result<(), Error> {
    let config = cli.connect_config();

    println!("Trying to establish connection to {}", config.host);
    let session = match connect(&config).await {
        Ok(session) => session,
        Err(err) => {
            println!("Failed to connect to Modbus server {}", config.host);
            return Err(err.into());
        }
    };
    println!("Connection to robot {} established", session.addr());

    let mut robot = Robot::new(session);
    let result = run_command(&cli.command, &mut robot).await;
    let closed = robot.into_inner().close().await;
    finish(result, closed)
}

/// the outcome of the command wins over a failure to close the session
fn finish(result: Result<(), Error>, closed: Result<(), tmrobot::Error>) -> Result<(), Error> {
    if let Err(err) = closed {
        tracing::warn!("failed to close session: {err}");
    }
    result
}

async fn run_command(command: &Command, robot: &mut Robot<Session>) -> Result<(), Error> {
    match command {
        Command::ChangeProject(args) => {
            robot.change_project(&args.name).await?;
            println!("Project file changed to {}", args.name);
        }
        Command::PlayPause => {
            robot.toggle_play_pause().await?;
            println!("Play/pause command sent");
        }
        Command::Speed(args) => {
            robot.set_speed(args.percent).await?;
            println!("Robot speed changed to {}", args.percent);
        }
        Command::Error => {
            println!("{}", robot.is_error_present().await?);
        }
        Command::Running => {
            println!("{}", robot.is_project_running().await?);
        }
        Command::Status => {
            println!("{}", robot.status().await?);
        }
        Command::Tutorial(args) => {
            let status = robot.run_tutorial(&args.project, args.speed).await?;
            println!("{status}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_robot() {
        let cli = Cli::try_parse_from(["tmrobot-client", "status"]).unwrap();
        let config = cli.connect_config();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.unit_id, 1);
        assert_eq!(config.timeout, Duration::from_secs(1));
        assert_eq!(cli.log_level().unwrap(), tracing::Level::INFO);
    }

    #[test]
    fn global_options_override_connection() {
        let cli = Cli::try_parse_from([
            "tmrobot-client",
            "--host",
            "10.0.0.5:1502",
            "-i",
            "3",
            "-t",
            "250",
            "play-pause",
        ])
        .unwrap();
        let config = cli.connect_config();
        assert_eq!(config.host.to_string(), "10.0.0.5:1502");
        assert_eq!(config.unit_id, 3);
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert!(matches!(cli.command, Command::PlayPause));
    }

    #[test]
    fn speed_must_be_a_percentage() {
        let cli = Cli::try_parse_from(["tmrobot-client", "speed", "40"]).unwrap();
        match cli.command {
            Command::Speed(args) => assert_eq!(args.percent.get(), 40),
            _ => panic!("expected the speed command"),
        }
        assert!(Cli::try_parse_from(["tmrobot-client", "speed", "101"]).is_err());
        assert!(Cli::try_parse_from(["tmrobot-client", "speed", "fast"]).is_err());
    }

    #[test]
    fn tutorial_defaults_to_pointspose_at_25_percent() {
        let cli = Cli::try_parse_from(["tmrobot-client", "tutorial"]).unwrap();
        match cli.command {
            Command::Tutorial(args) => {
                assert_eq!(args.project.as_str(), "pointspose");
                assert_eq!(args.speed.get(), 25);
            }
            _ => panic!("expected the tutorial command"),
        }
    }

    #[test]
    fn rejects_unknown_log_level() {
        let cli =
            Cli::try_parse_from(["tmrobot-client", "--log-level", "loud", "status"]).unwrap();
        assert!(matches!(cli.log_level(), Err(Error::LogLevel(_))));
    }

    #[test]
    fn project_name_is_checked_before_connecting() {
        let cli = Cli::try_parse_from(["tmrobot-client", "project", "pointspose"]).unwrap();
        match cli.command {
            Command::ChangeProject(args) => assert_eq!(args.name.as_str(), "pointspose"),
            _ => panic!("expected the project command"),
        }

        let err = match Cli::try_parse_from(["tmrobot-client", "project", "caf\u{e9}"]) {
            Ok(_) => panic!("accepted a non-ASCII project name"),
            Err(err) => err,
        };
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(Cli::try_parse_from(["tmrobot-client", "tutorial", "-p", ""]).is_err());
    }

    #[test]
    fn command_error_is_kept_when_close_also_fails() {
        let result = finish(
            Err(tmrobot::Error::EmptyResponse(7201).into()),
            Err(tmrobot::Error::Shutdown),
        );
        match result {
            Err(Error::Robot(tmrobot::Error::EmptyResponse(7201))) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn close_failure_alone_is_not_an_error() {
        assert!(finish(Ok(()), Err(tmrobot::Error::Shutdown)).is_ok());
    }
}
