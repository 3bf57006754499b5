use crate::error::KnapsackError;
use crate::io::ext_repr::{ExtInstance, ExtItem};
use anyhow::{Context, Result, anyhow};
use log::warn;
use std::str::SplitWhitespace;

/// Parses an instance in the plain text format:
///
/// ```text
/// n W
/// value1 weight1
/// ...
/// valueN weightN
/// ```
///
/// Tokens only need to be separated by whitespace, line breaks carry no meaning.
/// A negative `n` is reported as [`KnapsackError::InvalidCount`].
/// The returned instance is not validated any further, see [`import`](crate::io::import).
pub fn parse_text_instance(input: &str) -> Result<ExtInstance> {
    let mut tokens = Tokens(input.split_whitespace());

    let n_items = tokens.next_int("number of items")?;
    let capacity = tokens.next_int("capacity")?;
    if n_items < 0 {
        return Err(KnapsackError::InvalidCount(n_items).into());
    }

    let items = (1..=n_items)
        .map(|i| {
            let value = tokens.next_int("value").with_context(|| format!("item {i}/{n_items}"))?;
            let weight = tokens.next_int("weight").with_context(|| format!("item {i}/{n_items}"))?;
            Ok(ExtItem { value, weight })
        })
        .collect::<Result<Vec<_>>>()?;

    let n_trailing = tokens.0.count();
    if n_trailing > 0 {
        warn!("[PARSE] ignoring {n_trailing} trailing token(s) after the last item");
    }

    Ok(ExtInstance {
        name: None,
        capacity,
        items,
    })
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl Tokens<'_> {
    fn next_int(&mut self, what: &str) -> Result<i64> {
        let token = self
            .0
            .next()
            .ok_or_else(|| anyhow!("unexpected end of input, expected {what}"))?;
        token
            .parse::<i64>()
            .with_context(|| format!("could not parse {what} {token:?} as an integer"))
    }
}
