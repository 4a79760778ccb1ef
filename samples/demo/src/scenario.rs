//! Demonstration scenarios.
//!
//! Each scenario writes its output to the given writer so the binary can
//! print to stdout and the tests can inspect the text.

use std::io::Write;

use anyhow::{Context, Result, ensure};
use caseless_set::{CaseInsensitiveStringSet, SetConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Cities inserted by [`cities`].
pub const CITIES: [&str; 6] = ["oskemen", "atyrau", "nursultan", "almaty", "shymkent", "pavlodar"];

/// Strings of the batch-construction scenario; two of them are case variants.
pub const MIXED_CASE: [&str; 5] = ["abC", "aBc", "abcD", "key", "like"];

/// Input size of the first stress round.
const FIRST_STRESS_SIZE: usize = 1000;

/// Builds a small set, clears it and copies the empty set.
pub fn small_set(out: &mut impl Write) -> Result<CaseInsensitiveStringSet> {
    let mut small = CaseInsensitiveStringSet::new();
    small.insert("if");
    small.insert("the");
    small.insert("value");
    writeln!(out, "{small}")?;

    small.clear();
    writeln!(out, "this is the hash set: {small}")?;
    writeln!(out, "is small empty? {}", small.is_empty())?;

    let copy = small.clone();
    writeln!(out, "{copy}")?;

    writeln!(out, "{}", small.contains("xx"))?;
    writeln!(out, "{}", small.contains("yy"))?;
    Ok(small)
}

/// Builds a set from strings that collide case-insensitively.
pub fn mixed_case(out: &mut impl Write) -> Result<CaseInsensitiveStringSet> {
    let config = SetConfig::new(25.0).context("building the mixed-case configuration")?;
    let great = CaseInsensitiveStringSet::from_strings(MIXED_CASE, config);
    writeln!(out, "{great}")?;
    Ok(great)
}

/// Inserts the cities into `set`, removes one and prints a copy.
pub fn cities(set: &mut CaseInsensitiveStringSet, out: &mut impl Write) -> Result<()> {
    let (first, rest) = CITIES.split_first().context("city list is empty")?;

    set.insert(*first);
    writeln!(out, "{first} was added to the set")?;
    writeln!(out, "is the set empty? {}", set.is_empty())?;
    writeln!(out, "{}", set.contains("kostanay"))?;
    writeln!(out, "{set}")?;

    for city in rest {
        set.insert(*city);
    }
    writeln!(out, "{set}")?;
    writeln!(out, "{}", set.len())?;

    let removed = set.remove("atyrau");
    tracing::info!(removed, size = set.len(), "removed atyrau");

    let copy = set.clone();
    writeln!(out, "{copy}")?;
    writeln!(out, "size = {}", copy.len())?;
    Ok(())
}

/// Generates `count` strings of the form `string_<n>`.
pub fn random_strings(rng: &mut impl Rng, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| format!("string_{}", rng.random::<u32>()))
        .collect()
}

/// Runs one stress round and returns the number of successful insertions.
///
/// Every generated string is inserted together with its `X`-prefixed twin;
/// the copied set must report exactly as many elements as were inserted.
///
/// # Errors
///
/// Fails if the copy's size disagrees with the insertion count.
pub fn stress_round(
    strings: &[String],
    config: SetConfig,
    out: &mut impl Write,
) -> Result<usize> {
    let mut set = CaseInsensitiveStringSet::with_config(config);
    let mut insertions = 0;
    for string in strings {
        insertions += usize::from(set.insert(string.as_str()));
        insertions += usize::from(set.insert(format!("X{string}")));
    }

    let copy = set.clone();
    ensure!(
        insertions == copy.len(),
        "something went wrong with counting insertions: nr = {insertions}, size = {}",
        copy.len()
    );

    writeln!(out, "number of insertions {}", copy.len())?;
    writeln!(out, "finished test for {}", strings.len())?;
    write!(out, "{}", copy.statistics())?;
    Ok(insertions)
}

/// Runs stress rounds of 1000, 2000, 4000, ... strings below `limit`.
pub fn stress(config: SetConfig, limit: usize, seed: u64, out: &mut impl Write) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut size = FIRST_STRESS_SIZE;
    while size < limit {
        writeln!(out, "----------------------------------------")?;
        let strings = random_strings(&mut rng, size);
        let insertions = stress_round(&strings, config, out)
            .with_context(|| format!("stress round with {size} strings"))?;
        tracing::debug!(size, insertions, "stress round finished");
        size *= 2;
    }
    Ok(())
}
