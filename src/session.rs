//! Card sessions: turn a set name and size into assembled cards, prompting
//! for whatever the command line left out.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use rand::Rng;
use thiserror::Error;
use tracing::{info, warn};

use crate::core::{assemble, CardError, Grid};
use crate::input::{parse_size, select_name, Prompter};
use crate::store::{SetStore, StoreError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Card(#[from] CardError),

    #[error("set {0:?} is empty or does not exist")]
    EmptySet(String),
}

impl SessionError {
    /// Whether picking another set or size could succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SessionError::Card(_) | SessionError::EmptySet(_))
    }
}

/// What to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRequest {
    pub set: String,
    pub size: usize,
    pub free_cell: bool,
}

/// Load the set once and assemble `count` independent cards from it.
pub fn build_cards<S, R>(
    store: &S,
    request: &CardRequest,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Grid>, SessionError>
where
    S: SetStore + ?Sized,
    R: Rng + ?Sized,
{
    let pool = store.load_lines(&request.set)?;
    if pool.is_empty() {
        return Err(SessionError::EmptySet(request.set.clone()));
    }

    let cards = (0..count)
        .map(|_| assemble(&pool, request.size, request.free_cell, rng))
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        set = %request.set,
        size = request.size,
        count,
        "built cards"
    );
    Ok(cards)
}

/// Numbered set menu. `None` at end of input.
pub fn choose_set<S, In, Out>(store: &S, prompter: &mut Prompter<In, Out>) -> Result<Option<String>>
where
    S: SetStore + ?Sized,
    In: BufRead,
    Out: Write,
{
    let names = store.list_names()?;
    if names.is_empty() {
        bail!("no sets available; add one with `bingo sets add <name>`");
    }

    writeln!(prompter.output(), "Available sets:")?;
    for (i, name) in names.iter().enumerate() {
        writeln!(prompter.output(), "{}: {}", i + 1, name)?;
    }
    let choice = prompter.ask_until(
        "Choose a set: ",
        "Choose one of the available sets",
        |line| select_name(line, &names).map(str::to_string),
    )?;
    Ok(choice)
}

/// Card size prompt; an empty answer takes `default_size`.
pub fn choose_size<In: BufRead, Out: Write>(
    prompter: &mut Prompter<In, Out>,
    default_size: usize,
) -> Result<Option<usize>> {
    let question = format!("Card size [{}]: ", default_size);
    let size = prompter.ask_until(&question, "Enter a whole number of at least 1", |line| {
        if line.trim().is_empty() {
            Some(default_size)
        } else {
            parse_size(line)
        }
    })?;
    Ok(size)
}

/// Partially filled request from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestArgs {
    pub set: Option<String>,
    pub size: Option<usize>,
    pub free_cell: bool,
}

/// Build cards, prompting for a missing set or size.
///
/// When anything had to be prompted for, a set that is too small is reported
/// and both questions are asked again. With everything given up front, the
/// error is returned to the caller instead. `None` when input ends.
pub fn resolve_cards<S, R, In, Out>(
    store: &S,
    prompter: &mut Prompter<In, Out>,
    args: RequestArgs,
    default_size: usize,
    count: usize,
    rng: &mut R,
) -> Result<Option<(CardRequest, Vec<Grid>)>>
where
    S: SetStore + ?Sized,
    R: Rng + ?Sized,
    In: BufRead,
    Out: Write,
{
    let interactive = args.set.is_none() || args.size.is_none();
    let RequestArgs {
        mut set,
        mut size,
        free_cell,
    } = args;

    loop {
        let set_name = match set.take() {
            Some(name) => name,
            None => match choose_set(store, prompter)? {
                Some(name) => name,
                None => return Ok(None),
            },
        };
        let card_size = match size.take() {
            Some(n) => n,
            None => match choose_size(prompter, default_size)? {
                Some(n) => n,
                None => return Ok(None),
            },
        };

        let request = CardRequest {
            set: set_name,
            size: card_size,
            free_cell,
        };
        match build_cards(store, &request, count, rng) {
            Ok(cards) => return Ok(Some((request, cards))),
            Err(e) if interactive && e.is_recoverable() => {
                warn!(set = %request.set, size = request.size, error = %e, "could not build card");
                writeln!(
                    prompter.output(),
                    "Could not build a card: {}. Choose another set or size.",
                    e
                )?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
