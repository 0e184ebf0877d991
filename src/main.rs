//! `bingo` command-line entrypoint.
//!
//! Builds cards from stored sets and either prints them to a PDF, plays one
//! in the console, or renders one to stdout. Also manages the sets.

mod cli;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bingo_cards::config::BingoConfig;
use bingo_cards::core::rng;
use bingo_cards::export::{export_document, timestamped_file_name};
use bingo_cards::game::{run_game, GameOptions, GameOutcome};
use bingo_cards::input::Prompter;
use bingo_cards::pdf::PdfSink;
use bingo_cards::session::{resolve_cards, RequestArgs};
use bingo_cards::store::{FileSetStore, SetStore};
use bingo_cards::term::CardView;

use cli::{CardArgs, Cli, Command, PlayArgs, PrintArgs, SetsCommand, ShowArgs};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = BingoConfig::from_env()
        .with_sets_dir(cli.sets_dir)
        .with_output_dir(cli.output_dir);
    let store = FileSetStore::new(config.sets_dir.clone());

    match cli.command {
        Command::Print(args) => print_cards(&config, &store, args),
        Command::Play(args) => play(&config, &store, args),
        Command::Show(args) => show(&config, &store, args),
        Command::Sets(cmd) => manage_sets(&store, cmd),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => rng::seeded(seed),
        None => rng::from_entropy(),
    }
}

fn request_args(card: &CardArgs) -> RequestArgs {
    RequestArgs {
        set: card.set.clone(),
        size: card.size,
        free_cell: !card.no_free,
    }
}

fn print_cards(config: &BingoConfig, store: &FileSetStore, args: PrintArgs) -> Result<()> {
    let mut rng = make_rng(args.card.seed);
    let count = args.mode.cards_per_page() * args.pages as usize;
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());

    let Some((request, cards)) = resolve_cards(
        store,
        &mut prompter,
        request_args(&args.card),
        config.default_size,
        count,
        &mut rng,
    )?
    else {
        bail!("input closed before a set was chosen");
    };

    let doc = export_document(&cards, args.mode)?;
    let sink = PdfSink::new(config.output_dir.clone());
    let path = match args.out {
        Some(path) => {
            sink.write_to(&doc, &path)?;
            path
        }
        None => sink.write(&doc, &timestamped_file_name(args.mode, &request.set))?,
    };

    info!(set = %request.set, cards = cards.len(), "print finished");
    println!("Wrote {} card(s) to {}", cards.len(), path.display());
    Ok(())
}

fn play(config: &BingoConfig, store: &FileSetStore, args: PlayArgs) -> Result<()> {
    let mut rng = make_rng(args.card.seed);
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());

    let Some((request, mut cards)) = resolve_cards(
        store,
        &mut prompter,
        request_args(&args.card),
        config.default_size,
        1,
        &mut rng,
    )?
    else {
        return Ok(());
    };
    let Some(grid) = cards.first_mut() else {
        bail!("no card was built");
    };
    writeln!(prompter.output(), "\nYou chose: {}", request.set)?;

    let options = GameOptions {
        clear_screen: io::stdout().is_tty(),
        ascii: args.ascii,
    };
    match run_game(grid, &mut prompter, options)? {
        GameOutcome::Bingo { marked } => info!(marked, "game won"),
        GameOutcome::Quit | GameOutcome::InputClosed => {
            writeln!(prompter.output(), "{}", grid)?;
        }
    }
    Ok(())
}

fn show(config: &BingoConfig, store: &FileSetStore, args: ShowArgs) -> Result<()> {
    let mut rng = make_rng(args.card.seed);
    let mut prompter = Prompter::new(io::stdin().lock(), io::stderr());

    let Some((_, cards)) = resolve_cards(
        store,
        &mut prompter,
        request_args(&args.card),
        config.default_size,
        1,
        &mut rng,
    )?
    else {
        return Ok(());
    };
    let Some(grid) = cards.first() else {
        bail!("no card was built");
    };

    if args.json {
        let json = serde_json::to_string_pretty(&grid.snapshot())?;
        println!("{}", json);
    } else {
        println!("{}", CardView::print().with_ascii(args.ascii).render(grid)?);
    }
    Ok(())
}

fn manage_sets(store: &FileSetStore, cmd: SetsCommand) -> Result<()> {
    match cmd {
        SetsCommand::List => {
            let names = store.list_names()?;
            if names.is_empty() {
                println!("No sets in {}", store.base_dir().display());
            }
            for (i, name) in names.iter().enumerate() {
                println!("{}: {}", i + 1, name);
            }
        }
        SetsCommand::Show { name } => {
            let lines = store.load_lines(&name)?;
            if lines.is_empty() {
                bail!("set {:?} is empty or does not exist", name);
            }
            for line in lines {
                println!("{}", line);
            }
        }
        SetsCommand::Add { name, entries } => {
            let entries = entries_or_stdin(entries)?;
            if !store.save(&name, &entries)? {
                bail!("set {:?} already exists; use `sets replace`", name);
            }
            println!("Created set {:?}", name);
        }
        SetsCommand::Replace { name, entries } => {
            let entries = entries_or_stdin(entries)?;
            if !store.replace(&name, &entries)? {
                bail!("set {:?} does not exist", name);
            }
            println!("Replaced set {:?}", name);
        }
        SetsCommand::Delete { name } => {
            if !store.delete(&name)? {
                bail!("set {:?} does not exist", name);
            }
            println!("Deleted set {:?}", name);
        }
    }
    Ok(())
}

fn entries_or_stdin(entries: Vec<String>) -> Result<Vec<String>> {
    if !entries.is_empty() {
        return Ok(entries);
    }
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("reading entries from stdin")
}
