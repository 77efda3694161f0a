mod commands;
mod format;

use chess_client::{config, ChessApi, GameSessionClient};
use clap::Parser;
use commands::{parse_command, Command, HELP};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Play chess against a remote game service from the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Base URL of the game service, including the API prefix
    #[arg(long)]
    server: Option<String>,

    /// Directory for the daily log file
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to a file so they don't interleave with the board on stdout
    let log_dir = args.log_dir.unwrap_or_else(config::get_log_dir);
    std::fs::create_dir_all(&log_dir).ok();
    let file_appender = tracing_appender::rolling::daily(&log_dir, "chess-cli");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let server = args.server.unwrap_or_else(config::get_api_url);
    tracing::info!(%server, "Chess client starting up");

    let mut client = GameSessionClient::connect(&server)?;

    println!("Connected to {}", server);
    println!("Debug logs: {}/chess-cli.YYYY-MM-DD", log_dir.display());
    println!("Type `help` for commands.");
    println!();

    run(&mut client).await?;

    tracing::info!("Chess client shutting down");
    Ok(())
}

async fn run<A: ChessApi>(client: &mut GameSessionClient<A>) -> anyhow::Result<()> {
    // Show the board first; this also creates the game.
    match client.fetch_board().await {
        Ok(board) => println!("{}", format::format_board(&board)),
        Err(e) => println!("Could not load the board: {}", e),
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{} (try `help`)", e);
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }

        if let Err(e) = execute(client, command).await {
            tracing::error!("Command failed: {}", e);
            println!("Error: {}", e);
        }
    }

    Ok(())
}

async fn execute<A: ChessApi>(
    client: &mut GameSessionClient<A>,
    command: Command,
) -> anyhow::Result<()> {
    match command {
        Command::Board => {
            let board = client.fetch_board().await?;
            println!("{}", format::format_board(&board));
        }
        Command::Move(request) => {
            let result = client.submit_move(request).await?;
            match result.board {
                Some(board) if result.valid => {
                    println!("{}: {}", result.notation, result.message);
                    println!("{}", format::format_board(&board));
                }
                _ => println!("{} rejected: {}", result.notation, result.message),
            }
        }
        Command::ValidMoves(coord) => {
            let moves = client.fetch_valid_moves(coord.row, coord.col).await?;
            if moves.is_empty() {
                println!("No moves");
            } else {
                println!("{}", format::format_squares(&moves));
            }
        }
        Command::History => {
            let history = client.fetch_move_history().await?;
            if history.is_empty() {
                println!("No moves yet");
            }
            for (i, mv) in history.iter().enumerate() {
                println!("{:>3}. {}", i + 1, mv);
            }
        }
        Command::Reset => {
            let board = client.reset_game().await?;
            println!("New game");
            println!("{}", format::format_board(&board));
        }
        Command::Info => {
            println!("{}", client.service_info().await?);
        }
        Command::Help => println!("{}", HELP),
        Command::Quit => {}
    }

    Ok(())
}
